//! Text handling shared by the **TBL** and **MBM** codecs used by the *Etrian Odyssey* series.
//!
//! Both formats store text as Shift-JIS (code page 932), and both store Latin letters, digits
//! and common punctuation in their fullwidth forms. In memory, text is kept in its halfwidth
//! (canonical) form so it can be edited as ordinary strings.
//!
//! | Module          | Purpose                                                          |
//! |-----------------|------------------------------------------------------------------|
//! | [`fold`]        | Mapping between canonical and storage (fullwidth) characters     |
//! | [`sjis`]        | Decoding and encoding of single Shift-JIS characters             |
//! | [`fs`]          | Replacing files on disk without leaving partial writes behind    |
//!
//! The folding tables are not perfect inverses of each other. Both `。` and `．` fold to `.`,
//! which always unfolds to `．`, and both single quotation marks fold to `'`, which unfolds to
//! `’`. Text containing `。` or `‘` is therefore stored differently after a round trip.
//!

pub mod error;
pub mod fold;
pub mod fs;
pub mod sjis;

pub use fold::{to_canonical, to_storage};
