use crs_graph::BoundingBox;

/// Parse `--bbox S,W,N,E` (degrees).
pub(crate) fn parse_bbox(raw: &str) -> Result<BoundingBox, String> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid coordinate '{}'", part.trim()))
        })
        .collect::<Result<_, _>>()?;

    let &[south, west, north, east] = parts.as_slice() else {
        return Err(format!(
            "expected 4 comma-separated values (south,west,north,east), got {}",
            parts.len()
        ));
    };

    if !(-90.0..=90.0).contains(&south) || !(-90.0..=90.0).contains(&north) {
        return Err("latitude must be within -90..90".to_string());
    }
    if south > north {
        return Err("south must not exceed north".to_string());
    }
    if !(-180.0..=180.0).contains(&west) || !(-180.0..=180.0).contains(&east) {
        return Err("longitude must be within -180..180".to_string());
    }

    Ok(BoundingBox::new(south, west, north, east))
}
