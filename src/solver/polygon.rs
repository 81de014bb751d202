use anyhow::{anyhow, Context, Result};
use std::str::FromStr;

/// One polygon of a solved service area, without its solve time.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceAreaPolygon {
    pub facility_id: i64,
    pub name: String,
    pub from_break: f64,
    pub to_break: f64,
    /// Well-known text as produced by the solver.
    pub shape: String,
}

impl FromStr for ServiceAreaPolygon {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('\t').collect();
        if fields.len() != 5 {
            return Err(anyhow!(
                "Expected 5 tab-separated fields, found {}",
                fields.len()
            ));
        }
        Ok(ServiceAreaPolygon {
            facility_id: fields[0].trim().parse().context("Invalid facility id")?,
            name: fields[1].trim().to_owned(),
            from_break: fields[2].trim().parse().context("Invalid from break")?,
            to_break: fields[3].trim().parse().context("Invalid to break")?,
            shape: fields[4].trim().to_owned(),
        })
    }
}

pub fn parse_polygons(output: &str) -> Result<Vec<ServiceAreaPolygon>> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(index, line)| {
            line.parse::<ServiceAreaPolygon>()
                .with_context(|| format!("While reading solver output line {}", index + 1))
        })
        .collect()
}
