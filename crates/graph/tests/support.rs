#![allow(dead_code)]

use crs_catalog::Catalog;

/// Small Japanese datum catalog plus an unconnected New Zealand pair and a
/// three-hop chain used for the complex-route checks.
pub const FIXTURE: &str = r#"{
    "version": "fixture-1",
    "transformations": [
        {
            "id": "tokyo-jgd2000",
            "from": "EPSG:4301",
            "to": "EPSG:4612",
            "method": "TKY2JGD",
            "accuracy": "1-2m",
            "reversible": true,
            "reverseNote": "Inverse TKY2JGD"
        },
        {
            "id": "jgd2000-jgd2011",
            "from": "EPSG:4612",
            "to": "EPSG:6668",
            "method": "PatchJGD",
            "accuracy": "2-5cm",
            "reversible": true
        },
        {
            "id": "jgd2011-wgs84",
            "from": "EPSG:6668",
            "to": "EPSG:4326",
            "method": "Null transformation",
            "accuracy": "1-2m",
            "reversible": false
        },
        {
            "id": "nzgd2000-nztm",
            "from": "EPSG:4167",
            "to": "EPSG:2193",
            "method": "Transverse Mercator",
            "accuracy": "No error",
            "reversible": true
        },
        {
            "id": "chain-1",
            "from": "EPSG:9001",
            "to": "EPSG:9002",
            "method": "Step one",
            "accuracy": "No error",
            "reversible": false
        },
        {
            "id": "chain-2",
            "from": "EPSG:9002",
            "to": "EPSG:9003",
            "method": "Step two",
            "accuracy": "No error",
            "reversible": false
        },
        {
            "id": "chain-3",
            "from": "EPSG:9003",
            "to": "EPSG:9004",
            "method": "Step three",
            "accuracy": "3cm",
            "reversible": false
        }
    ],
    "deprecated": {
        "EPSG:4301": {
            "note": "Tokyo datum is obsolete",
            "replacement": "EPSG:6668"
        }
    }
}"#;

pub fn fixture_catalog() -> Catalog {
    Catalog::from_json_str(FIXTURE).expect("fixture catalog")
}
