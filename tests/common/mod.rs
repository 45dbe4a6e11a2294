// tests/common/mod.rs
// Synthetic BGA archive logs, shaped like the real notification dump.
#![allow(dead_code)]

pub struct LogBuilder {
    parts: Vec<String>,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self { parts: vec![String::from(r#"{"status":1,"data":{"logs":[{"move_id":"1","data":[{"uid":"0","type":"gameStart","log":"","args":{}}"#)] }
    }

    /// Role pick; starts a new turn.
    pub fn pick(mut self, player: &str, role: &str) -> Self {
        self.parts.push(format!(
            r#",{{"uid":"p","type":"roleSelected","log":"${{player_name}} selected the ${{rol_type_tr}}","args":{{"i18n":["rol_type_tr"],"player_name":"{player}","rol_type":"{role}","rol_type_tr":"{role}"}}}}"#
        ));
        self
    }

    /// Templated notification. Integer args are written bare, everything else quoted.
    pub fn event(mut self, template: &str, args: &[(&str, &str)]) -> Self {
        let args: Vec<String> = args
            .iter()
            .map(|(k, v)| {
                if v.parse::<i64>().is_ok() {
                    format!(r#""{k}":{v}"#)
                } else {
                    format!(r#""{k}":"{v}""#)
                }
            })
            .collect();
        self.parts.push(format!(
            r#",{{"uid":"e","type":"note","log":"{template}","args":{{{}}}}}"#,
            args.join(",")
        ));
        self
    }

    pub fn build(mut self) -> String {
        self.parts.push(String::from("]}]}}"));
        self.parts.concat()
    }
}

/// Six turns, three players. Final score: Alice 6, Carol 4, Bob 2.
///
/// | turn | picker | role       |
/// |------|--------|------------|
/// | 0    | Alice  | settler    |
/// | 1    | Bob    | builder    |
/// | 2    | Carol  | captain    |
/// | 3    | Alice  | mayor      |
/// | 4    | Bob    | prospector |
/// | 5    | Carol  | trader     |
pub fn three_player_game() -> String {
    LogBuilder::new()
        .pick("Alice", "settler")
        .event("${player_name} got a new plantation: ${plantation_name}", &[("player_name", "Alice"), ("plantation_name", "coffee")])
        .event("${player_name} got a new plantation from the deck", &[("player_name", "Bob")])
        .event("${player_name} got a new quarry", &[("player_name", "Carol")])
        .pick("Bob", "builder")
        .event(
            "${player_name} bought a new building for ${cost} doubloons: ${building_name}",
            &[("player_name", "Bob"), ("cost", "1"), ("building_name", "small market")],
        )
        .event(
            "${player_name} bought a new building for ${cost} doubloons: ${building_name}",
            &[("player_name", "Alice"), ("cost", "5"), ("building_name", "large market")],
        )
        .pick("Carol", "captain")
        .event(
            "${player_name} shipped ${nbr} ${goods_name} and got ${vp} victory points for shipping",
            &[("player_name", "Carol"), ("nbr", "3"), ("goods_name", "corn"), ("vp", "3")],
        )
        .event("${player_name} got ${vp} victory point as his privilege", &[("player_name", "Carol"), ("vp", "1")])
        .event("${player_name} got ${vp} victory point from his harbor", &[("player_name", "Bob"), ("vp", "1")])
        .event("The ship with ${nbr} spaces leaves", &[("nbr", "4")])
        .pick("Alice", "mayor")
        .event("${player_name} got ${nbr} doubloon from the role card", &[("player_name", "Alice"), ("nbr", "1")])
        .event("${player_name} got a colonist from the supply as his privilege", &[("player_name", "Alice")])
        .event("${player_name} got ${nbr} colonists from the ship", &[("player_name", "Bob"), ("nbr", "2")])
        .pick("Bob", "prospector")
        .event("${player_name} got ${nbr} doubloon", &[("player_name", "Bob"), ("nbr", "1")])
        .pick("Carol", "trader")
        .event(
            "${player_name} sold ${goods_name} and got ${nbr} doubloons from the sale",
            &[("player_name", "Carol"), ("goods_name", "sugar"), ("nbr", "2")],
        )
        .event(
            "${player_name} got ${vp} victory points for shipping during the game",
            &[("player_name", "Carol"), ("vp", "4")],
        )
        .event("${player_name} got ${vp} bonus points", &[("player_name", "Alice"), ("vp", "4")])
        .build()
}

/// Two turns, two players, no points scored: a tie.
pub fn two_player_tie() -> String {
    LogBuilder::new()
        .pick("Dora", "craftsman")
        .event("${player_name} got ${nbr} doubloons from his factory", &[("player_name", "Dora"), ("nbr", "2")])
        .pick("Eve", "trader")
        .event("${player_name} got ${nbr} doubloon from his small market", &[("player_name", "Eve"), ("nbr", "1")])
        .build()
}

/// Buys a building nobody has heard of on the second turn.
pub fn broken_game() -> String {
    LogBuilder::new()
        .pick("Finn", "builder")
        .pick("Gus", "builder")
        .event(
            "${player_name} bought a new building for ${cost} doubloons: ${building_name}",
            &[("player_name", "Gus"), ("cost", "9"), ("building_name", "castle")],
        )
        .build()
}

/// Reads exported CSV/TSV back into cells. Quoted cells may hold the
/// separator, doubled quotes and line breaks; blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => quoted = false,
                _ => cell.push(c),
            }
            continue;
        }
        match c {
            '"' => quoted = true,
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                let line = std::mem::take(&mut row);
                if line != [""] {
                    rows.push(line);
                }
            }
            c if c == sep => row.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }
    rows
}
