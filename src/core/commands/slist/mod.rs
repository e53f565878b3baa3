// src/core/commands/slist/mod.rs

//! The sorted-list command family: SLADD, SLREM, SLALL, SLRANGE, SLSEARCH,
//! and SLCARD.

pub mod helpers;
pub mod sladd;
pub mod slall;
pub mod slcard;
pub mod slrange;
pub mod slrem;
pub mod slsearch;

pub use sladd::SlAdd;
pub use slall::SlAll;
pub use slcard::SlCard;
pub use slrange::SlRange;
pub use slrem::SlRem;
pub use slsearch::SlSearch;
