//! Build script: compiles the material tables under `data/` into Rust source.
//!
//! The generated modules are included by `src/generated.rs`, so material
//! lookups never parse TOML at runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Deserialize)]
struct TimberTable {
    grade: Vec<TimberRow>,
}

#[derive(Deserialize)]
struct TimberRow {
    code: String,
    seasoned: bool,
    fb_mpa: f64,
    ft_mpa: f64,
    fs_mpa: f64,
    fc_mpa: f64,
    e_mpa: f64,
    g_mpa: f64,
}

#[derive(Deserialize)]
struct KmTable {
    km: Vec<KmRow>,
}

#[derive(Deserialize)]
struct KmRow {
    unit: String,
    mortar: String,
    bedding: String,
    km: f64,
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    println!("cargo:rerun-if-changed=data/timber_grades.toml");
    println!("cargo:rerun-if-changed=data/masonry_km.toml");

    let timber_src = fs::read_to_string("data/timber_grades.toml")
        .expect("failed to read data/timber_grades.toml");
    let timber: TimberTable =
        toml::from_str(&timber_src).expect("failed to parse data/timber_grades.toml");
    fs::write(
        Path::new(&out_dir).join("timber_data.rs"),
        generate_timber(&timber),
    )
    .expect("failed to write timber_data.rs");

    let km_src =
        fs::read_to_string("data/masonry_km.toml").expect("failed to read data/masonry_km.toml");
    let km: KmTable = toml::from_str(&km_src).expect("failed to parse data/masonry_km.toml");
    fs::write(Path::new(&out_dir).join("masonry_data.rs"), generate_km(&km))
        .expect("failed to write masonry_data.rs");
}

fn generate_timber(table: &TimberTable) -> String {
    let mut code = String::new();
    code.push_str(
        "/// One row of the timber characteristic property table (MPa).\n\
         #[derive(Debug, Clone, Copy, PartialEq)]\n\
         pub struct TimberRow {\n    \
             pub code: &'static str,\n    \
             pub seasoned: bool,\n    \
             pub fb_mpa: f64,\n    \
             pub ft_mpa: f64,\n    \
             pub fs_mpa: f64,\n    \
             pub fc_mpa: f64,\n    \
             pub e_mpa: f64,\n    \
             pub g_mpa: f64,\n\
         }\n\n",
    );
    code.push_str("pub static ROWS: &[TimberRow] = &[\n");
    for row in &table.grade {
        writeln!(
            code,
            "    TimberRow {{ code: {:?}, seasoned: {}, fb_mpa: {:?}, ft_mpa: {:?}, fs_mpa: {:?}, \
             fc_mpa: {:?}, e_mpa: {:?}, g_mpa: {:?} }},",
            row.code,
            row.seasoned,
            row.fb_mpa,
            row.ft_mpa,
            row.fs_mpa,
            row.fc_mpa,
            row.e_mpa,
            row.g_mpa
        )
        .expect("writing to a String cannot fail");
    }
    code.push_str("];\n");
    code
}

fn generate_km(table: &KmTable) -> String {
    let mut code = String::new();
    code.push_str(
        "/// One row of the mortar strength factor table.\n\
         #[derive(Debug, Clone, Copy, PartialEq)]\n\
         pub struct KmRow {\n    \
             pub unit: &'static str,\n    \
             pub mortar: &'static str,\n    \
             pub bedding: &'static str,\n    \
             pub km: f64,\n\
         }\n\n",
    );
    code.push_str("pub static ROWS: &[KmRow] = &[\n");
    for row in &table.km {
        writeln!(
            code,
            "    KmRow {{ unit: {:?}, mortar: {:?}, bedding: {:?}, km: {:?} }},",
            row.unit, row.mortar, row.bedding, row.km
        )
        .expect("writing to a String cannot fail");
    }
    code.push_str("];\n");
    code
}
