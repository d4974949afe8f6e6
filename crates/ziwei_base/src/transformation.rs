//! Year-stem transformation (四化) table and assignment.
//!
//! Each heavenly stem maps up to four tags onto named stars. Pairs whose
//! traditional target is not among the placed stars are omitted, so some
//! stems carry fewer than four entries.

use crate::star::{Star, StarName, Transformation};
use crate::stem::{HeavenlyStem, year_stem};

use StarName::*;
use Transformation::{Ji, Ke, Lu, Quan};

/// `(tag, target star)` pairs for a stem.
pub const fn stem_transformations(stem: HeavenlyStem) -> &'static [(Transformation, StarName)] {
    match stem {
        HeavenlyStem::Jia => &[(Quan, PoJun), (Ji, TaiYang)],
        HeavenlyStem::Yi => &[(Quan, TianLiang), (Ke, ZiWei), (Ji, TaiYin)],
        HeavenlyStem::Bing => &[(Ke, WenChang)],
        HeavenlyStem::Ding => &[(Lu, TaiYin), (Ji, JuMen)],
        HeavenlyStem::Wu => &[(Lu, TanLang), (Quan, TaiYin), (Ke, YouBi)],
        HeavenlyStem::Ji => &[(Quan, TanLang), (Ke, TianLiang), (Ji, WenQu)],
        HeavenlyStem::Geng => &[(Lu, TaiYang), (Ke, TaiYin)],
        HeavenlyStem::Xin => &[(Lu, JuMen), (Quan, TaiYang), (Ke, WenQu), (Ji, WenChang)],
        HeavenlyStem::Ren => &[(Lu, TianLiang), (Quan, ZiWei), (Ke, ZuoFu)],
        HeavenlyStem::Gui => &[(Lu, PoJun), (Quan, JuMen), (Ke, TaiYin), (Ji, TanLang)],
    }
}

/// Append the birth year's tags to every star they target.
pub fn apply_transformations(stars: &mut [Star], year: i32) {
    let stem = year_stem(year);
    let table = stem_transformations(stem);
    for star in stars.iter_mut() {
        for &(tag, target) in table {
            if star.name == target {
                star.aspects.push(tag);
            }
        }
    }
    tracing::trace!(year, stem = stem.name(), "applied year-stem transformations");
}
