//! GeoJSON catchment export.
//!
//! One feature per catchment, with `facility_id` and `facility_name`
//! properties — directly loadable by web maps and desktop GIS tools.

use std::path::Path;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue};

use ca_catchment::Catchment;
use ca_core::Facility;

use crate::OutputResult;

/// Convert catchments into a GeoJSON feature collection.
pub fn catchments_to_feature_collection(
    catchments: &[Catchment],
    facilities: &[Facility],
) -> FeatureCollection {
    let features = catchments
        .iter()
        .map(|c| {
            let mut properties = JsonObject::new();
            properties.insert("facility_id".to_string(), JsonValue::from(c.facility.0));
            properties.insert(
                "facility_name".to_string(),
                JsonValue::from(facilities[c.facility.index()].name.clone()),
            );
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::from(&c.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

/// Write the catchments to a `.geojson` file.
pub fn write_catchments_geojson(
    path: &Path,
    catchments: &[Catchment],
    facilities: &[Facility],
) -> OutputResult<()> {
    let fc = catchments_to_feature_collection(catchments, facilities);
    std::fs::write(path, GeoJson::FeatureCollection(fc).to_string())?;
    Ok(())
}
