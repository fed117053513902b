//! Domain Entities
//!
//! - `FightCard` - the `fights` array of one input document
//! - `FightRecord` - a borrowed view of one fight
//! - `MainCardEntry` - one rendered line of the main-card listing

mod fight;

pub use fight::{
    Corner, FieldPolicy, FightCard, FightRecord, FighterName, MainCardEntry, FIGHTS_KEY,
    MAIN_CARD_SIZE,
};
