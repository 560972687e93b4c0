//! rcode pass: code lookup built from the externally sorted responsibilities
//! document, and the rewriter that swaps rlabel suffixes for rcodes.

mod lookup;
mod rewrite;

pub use lookup::CodeLookup;
pub use rewrite::replace_rlabels_with_rcodes;
