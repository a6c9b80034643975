//! Fixed reaction id lists for the pathway slices of interest

/// Reaction ids covering E. coli histidine biosynthesis (iJO1366 ids)
///
/// The list runs from ribose uptake (`RIBtex` through `PRPPS`) across the
/// biosynthesis chain proper (`ATPPRT` through `HISTD`) and ends at the
/// histidine transporters. It is a known-good constant, so an id missing from
/// a model is a model problem, not an input problem.
pub const HISTIDINE_BIOSYNTHESIS: [&str; 15] = [
    "RIBtex", "RIBabcpp", "RBK", "PRPPS", "ATPPRT", "PRATPP", "PRAMPC", "PRMICI", "IG3PS",
    "IGPDH", "HSTPT", "HISTP", "HISTD", "HISabcpp", "HIStex",
];
