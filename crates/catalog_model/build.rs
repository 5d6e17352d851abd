use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const REQUIRED_DOMAINS: [&str; 2] = ["users", "products"];

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    domains: Vec<DomainManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DomainManifest {
    id: String,
    label: String,
    items: Vec<String>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    for domain in &catalog.domains {
        if !REQUIRED_DOMAINS.contains(&domain.id.as_str()) {
            panic!("unknown domain `{}` in {}", domain.id, path.display());
        }
    }
    for required in REQUIRED_DOMAINS {
        let count = catalog
            .domains
            .iter()
            .filter(|domain| domain.id == required)
            .count();
        if count != 1 {
            panic!(
                "domain `{required}` must appear exactly once in {} (found {count})",
                path.display()
            );
        }
    }

    let json =
        serde_json::to_string_pretty(&catalog.domains).expect("serialize item catalog");
    let generated = format!(
        "/// Build-time generated item catalog JSON.\n\
const ITEM_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("item_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
