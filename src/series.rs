// src/series.rs
use std::{
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use crate::{
    game::Game,
    progress::Progress,
    store::LogSource,
};

/// An ordered batch of parsed games.
#[derive(Clone, Debug, Default)]
pub struct Series {
    games: Vec<Game>,
}

/// Result of a batch load: the games that made it, and why the others did not.
#[derive(Debug, Default)]
pub struct SeriesLoad {
    pub series: Series,
    /// `(id, error text)` in input order.
    pub failures: Vec<(String, String)>,
}

impl Series {
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &[Game] { &self.games }

    pub fn len(&self) -> usize { self.games.len() }

    pub fn is_empty(&self) -> bool { self.games.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> { self.games.iter() }

    /// Games with exactly `n` distinct players.
    pub fn player_filter(&self, n: usize) -> Series {
        let games = self.games.iter().filter(|g| g.players().len() == n).cloned().collect();
        Series { games }
    }

    /// Fetch and tabulate `ids` on up to `workers` threads.
    ///
    /// A failing game is reported and left out; the rest still load.
    /// Output order follows `ids`, whatever order the workers finish in.
    pub fn load(
        source: &dyn LogSource,
        ids: &[String],
        workers: usize,
        mut progress: Option<&mut dyn Progress>,
    ) -> SeriesLoad {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(ids.len());
            p.log("Parsing game logs…");
        }

        type Loaded = (usize, Result<Game, String>);

        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<Loaded>();
        let workers = workers.min(ids.len()).max(1);

        let mut slots: Vec<Option<Result<Game, String>>> = Vec::new();
        slots.resize_with(ids.len(), || None);

        thread::scope(|scope| {
            for _ in 0..workers {
                let idx = &counter;
                let tx = res_tx.clone();
                scope.spawn(move || {
                    loop {
                        let i = idx.fetch_add(1, Ordering::Relaxed);
                        if i >= ids.len() {
                            break;
                        }
                        let id = &ids[i];
                        let result = source
                            .fetch_log(id)
                            .and_then(|text| Game::with_id(id.as_str(), &text))
                            .map_err(|e| e.to_string());
                        if tx.send((i, result)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(res_tx); // calling thread is sole receiver now

            for (i, result) in res_rx.iter() {
                if let Some(p) = progress.as_deref_mut() {
                    match &result {
                        Ok(_) => p.item_done(&ids[i]),
                        Err(msg) => p.item_failed(&ids[i], msg),
                    }
                }
                slots[i] = Some(result);
            }
        });

        let mut out = SeriesLoad::default();
        for (id, slot) in ids.iter().zip(slots) {
            match slot {
                Some(Ok(game)) => out.series.games.push(game),
                Some(Err(msg)) => {
                    loge!("game {id}: {msg}");
                    out.failures.push((id.clone(), msg));
                }
                None => {
                    loge!("game {id}: worker exited before reporting");
                    out.failures.push((id.clone(), s!("not processed")));
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!("{} games loaded, {} failed", out.series.len(), out.failures.len());
        out
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter { self.games.iter() }
}
