pub mod fine_tunes;
