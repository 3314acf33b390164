//! Country canonicalization and choropleth output

pub mod boundary;
pub mod choropleth;
pub mod iso;
pub mod overrides;
pub mod resolver;

pub use boundary::{BoundaryDataset, BoundaryProvider, HttpBoundaryProvider};
pub use choropleth::{render_choropleth, write_choropleth};
pub use resolver::{
    CodeLookup, CountryCodeLookup, CountryKeyMapping, CountryNameResolver, IsoCodeLookup,
    ResolutionSource, ResolvedKey,
};
