//! GeoJSON ⇄ [`MemoryLayer`] conversion.
//!
//! GeoJSON carries no schema, so one is inferred: field order is
//! first-seen across the collection, and each field's type is widened
//! over the observed values (int and float unify to float, any other
//! mix degrades to `any`). GeoJSON coordinates are WGS 84 by definition,
//! which fixes the spatial reference.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use geo_types::Geometry;
use geodelta_geom::GeometryKind;
use geodelta_layer::{Feature, Layer, MemoryLayer, SpatialRef};
use geodelta_types::{Field, FieldType, Schema, Value};
use geojson::{FeatureCollection, GeoJson};
use tracing::debug;

/// Read a GeoJSON FeatureCollection into a layer.
pub fn read_layer(path: &Path) -> anyhow::Result<MemoryLayer> {
    let text = fs::read_to_string(path)?;
    let geojson: GeoJson = text.parse().context("parsing GeoJSON")?;
    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => bail!("expected a GeoJSON FeatureCollection"),
    };
    layer_from_collection(collection)
}

/// Write a layer as a GeoJSON FeatureCollection.
pub fn write_layer(path: &Path, layer: &MemoryLayer) -> anyhow::Result<()> {
    let features = layer.features().map(gj_feature_from).collect();
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    fs::write(path, GeoJson::from(collection).to_string())?;
    Ok(())
}

fn layer_from_collection(collection: FeatureCollection) -> anyhow::Result<MemoryLayer> {
    let mut order: Vec<String> = Vec::new();
    let mut types: BTreeMap<String, Option<FieldType>> = BTreeMap::new();
    let mut kind: Option<GeometryKind> = None;
    let mut features = Vec::new();

    for gj_feature in collection.features {
        let mut feature = Feature::new();
        if let Some(properties) = gj_feature.properties {
            for (name, json) in properties {
                if !types.contains_key(&name) {
                    order.push(name.clone());
                }
                let value = value_from_json(json);
                let slot = types.entry(name.clone()).or_insert(None);
                *slot = widen(*slot, &value);
                feature.attrs.insert(name, value);
            }
        }
        if let Some(geometry) = gj_feature.geometry {
            let geometry =
                Geometry::<f64>::try_from(geometry).context("converting geometry")?;
            kind.get_or_insert_with(|| GeometryKind::of(&geometry));
            feature.geometry = Some(geometry);
        }
        features.push(feature);
    }

    let fields = order
        .into_iter()
        .map(|name| {
            let ty = types[&name].unwrap_or(FieldType::Any);
            Field::new(name, ty)
        })
        .collect();
    let kind = kind.unwrap_or_else(|| {
        debug!("collection has no geometries, defaulting kind to Point");
        GeometryKind::Point
    });

    Ok(MemoryLayer::with_features(
        Schema::new(fields),
        kind,
        SpatialRef::wgs84(),
        features,
    ))
}

/// Widen a field's inferred type with one more observed value.
fn widen(current: Option<FieldType>, value: &Value) -> Option<FieldType> {
    let Some(observed) = value.field_type() else {
        return current;
    };
    match current {
        None => Some(observed),
        Some(ty) if ty == observed => Some(ty),
        Some(FieldType::Int) if observed == FieldType::Float => Some(FieldType::Float),
        Some(FieldType::Float) if observed == FieldType::Int => Some(FieldType::Float),
        Some(_) => Some(FieldType::Any),
    }
}

fn value_from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(x) = n.as_f64() {
                Value::Float(x)
            } else {
                Value::Text(n.to_string())
            }
        }
        serde_json::Value::String(s) => Value::Text(s),
        other => {
            debug!("flattening non-scalar property to text");
            Value::Text(other.to_string())
        }
    }
}

fn gj_feature_from(feature: &Feature) -> geojson::Feature {
    let mut properties = geojson::JsonObject::new();
    for (name, value) in &feature.attrs {
        properties.insert(name.clone(), json_from_value(value));
    }
    geojson::Feature {
        bbox: None,
        geometry: feature
            .geometry
            .as_ref()
            .map(|g| geojson::Geometry::new(geojson::Value::from(g))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn json_from_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => (*b).into(),
        Value::Int(i) => (*i).into(),
        Value::Float(x) => (*x).into(),
        Value::Text(s) => s.clone().into(),
    }
}
