//! Material tables compiled from `data/*.toml` by the build script.

/// Timber characteristic properties keyed by grade code and seasoning.
pub mod timber_data {
    include!(concat!(env!("OUT_DIR"), "/timber_data.rs"));
}

/// Masonry mortar strength factors keyed by unit, mortar class and bedding.
pub mod masonry_data {
    include!(concat!(env!("OUT_DIR"), "/masonry_data.rs"));
}
