// src/specs/catalog.rs
// Closed item sets of the game, in ledger column order.

catalog! {
    /// Role a player picks at the start of each turn.
    pub enum Role {
        Builder => "builder",
        Mayor => "mayor",
        Captain => "captain",
        Craftsman => "craftsman",
        Trader => "trader",
        Settler => "settler",
        Prospector => "prospector",
    }
}

catalog! {
    /// Plantation crops. Order is the lookup order for `$crop` in settler events.
    pub enum Crop {
        Corn => "corn",
        Indigo => "indigo",
        Sugar => "sugar",
        Tobacco => "tobacco",
        Coffee => "coffee",
    }
}

impl Crop {
    pub fn column(self) -> &'static str {
        match self {
            Crop::Corn => "plant_corn",
            Crop::Indigo => "plant_indigo",
            Crop::Sugar => "plant_sugar",
            Crop::Tobacco => "plant_tobacco",
            Crop::Coffee => "plant_coffee",
        }
    }
}

catalog! {
    /// Purchasable buildings, grouped by victory-point tier.
    pub enum Building {
        SmallIndigoPlant => "small indigo plant",
        SmallSugarMill => "small sugar mill",
        SmallMarket => "small market",
        Hacienda => "hacienda",
        ConstructionHut => "construction hut",
        SmallWarehouse => "small warehouse",

        IndigoPlant => "indigo plant",
        SugarMill => "sugar mill",
        Hospice => "hospice",
        Office => "office",
        LargeMarket => "large market",
        LargeWarehouse => "large warehouse",

        TobaccoStorage => "tobacco storage",
        CoffeeRoaster => "coffee roaster",
        Factory => "factory",
        University => "university",
        Harbor => "harbor",
        Wharf => "wharf",

        GuildHall => "guild hall",
        CustomsHouse => "customs house",
        Residence => "residence",
        CityHall => "city hall",
        Fortress => "fortress",
    }
}

impl Building {
    /// Victory points printed on the building.
    pub fn vp(self) -> i64 {
        use Building::*;
        match self {
            SmallIndigoPlant | SmallSugarMill | SmallMarket
            | Hacienda | ConstructionHut | SmallWarehouse => 1,
            IndigoPlant | SugarMill | Hospice
            | Office | LargeMarket | LargeWarehouse => 2,
            TobaccoStorage | CoffeeRoaster | Factory
            | University | Harbor | Wharf => 3,
            GuildHall | CustomsHouse | Residence
            | CityHall | Fortress => 4,
        }
    }
}
