//! Spec parsers for graph-building flags
//!
//! Node names are canonicalized to uppercase, matching the simulator's
//! input handling (nodes are labeled A, B, C, ...).

/// A `FROM-TO:WEIGHT` edge flag, e.g. `A-B:3`
#[derive(Debug, Clone)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

/// A `NAME:X,Y` node flag, e.g. `A:120,80`; coordinates optional
#[derive(Debug, Clone)]
pub struct NodeSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Canonical node name: trimmed and uppercased
pub fn canon(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Parse an edge spec for clap (`A-B:3`)
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let (pair, weight) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM-TO:WEIGHT, got '{}'", s))?;
    let (from, to) = pair
        .split_once('-')
        .ok_or_else(|| format!("expected FROM-TO:WEIGHT, got '{}'", s))?;
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(format!("expected FROM-TO:WEIGHT, got '{}'", s));
    }
    let weight = weight
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid edge weight '{}'", weight))?;
    Ok(EdgeSpec {
        from: canon(from),
        to: canon(to),
        weight,
    })
}

/// Parse a node spec for clap (`A:120,80` or bare `A`)
pub fn parse_node_spec(s: &str) -> std::result::Result<NodeSpec, String> {
    let (name, coords) = match s.split_once(':') {
        Some((name, coords)) => (name, Some(coords)),
        None => (s, None),
    };
    if name.trim().is_empty() {
        return Err(format!("expected NAME:X,Y, got '{}'", s));
    }
    let (x, y) = match coords {
        Some(coords) => {
            let (x, y) = coords
                .split_once(',')
                .ok_or_else(|| format!("expected NAME:X,Y, got '{}'", s))?;
            let x = x
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid coordinate '{}'", x))?;
            let y = y
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid coordinate '{}'", y))?;
            (x, y)
        }
        None => (0.0, 0.0),
    };
    Ok(NodeSpec {
        name: canon(name),
        x,
        y,
    })
}
