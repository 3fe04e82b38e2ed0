pub mod format;
pub mod parse;

pub use format::{
    GeometryFormat, cell_to_feature, cell_to_geojson, cell_to_wkt, cells_to_feature_collection,
    format_cell,
};
pub use parse::{cells_from_geometry_str, parse_geojson, parse_geometry, parse_wkt};
