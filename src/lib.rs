//! Deterministic prediction engine for soccer match outcomes.
//!
//! Turns raw match signals (bookmaker odds, team form snapshots, weather,
//! rolling feature aggregates) into win/draw/away probability triples,
//! picks with confidence grades, draw warnings, value-bet signals and
//! five-axis team power ratings. Every computation is a pure function of
//! its inputs; ingestion, persistence and presentation live elsewhere.

pub mod adjust;
pub mod analysis;
pub mod draw_likelihood;
pub mod error;
pub mod factors;
pub mod league;
pub mod narrative;
pub mod odds;
pub mod radar;
pub mod sample_feed;
pub mod scoring;
pub mod state;
pub mod value_bet;
