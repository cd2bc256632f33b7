//! Owned registry of rendered map elements
//!
//! The rendering collaborator keeps every shape it has placed on the map
//! here, keyed by a monotonically increasing id, so a later delete request
//! can find the element it refers to. The registry holds no rendering
//! state itself and is single-owner: callers sharing it across threads
//! must serialize access.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::{Footprint, GeoPoint};

/// A shape placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapElement {
    /// A single point of interest
    Marker { position: GeoPoint },
    /// A closed path traced through two or more points
    Polygon { path: Vec<GeoPoint> },
}

/// Id-keyed collection of map elements with its own id counter
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: HashMap<u64, MapElement>,
    next_id: u64,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the shape described by `points`: one point becomes a
    /// marker, two or more a polygon. An empty list registers nothing,
    /// matching how an empty operator input is dropped.
    pub fn insert(&mut self, points: Vec<GeoPoint>) -> Option<u64> {
        let element = match points.len() {
            0 => return None,
            1 => MapElement::Marker {
                position: points[0],
            },
            _ => MapElement::Polygon { path: points },
        };
        Some(self.insert_element(element))
    }

    /// Register a computed footprint as two elements: the corner polygon
    /// and the antenna marker. Returns `(polygon_id, marker_id)`.
    pub fn insert_footprint(&mut self, footprint: &Footprint) -> (u64, u64) {
        let polygon_id = self.insert_element(MapElement::Polygon {
            path: footprint.corners.to_vec(),
        });
        let marker_id = self.insert_element(MapElement::Marker {
            position: footprint.antenna,
        });
        (polygon_id, marker_id)
    }

    fn insert_element(&mut self, element: MapElement) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.elements.insert(id, element);
        id
    }

    /// Remove an element, returning it if the id was registered.
    pub fn remove(&mut self, id: u64) -> Option<MapElement> {
        self.elements.remove(&id)
    }

    pub fn get(&self, id: u64) -> Option<&MapElement> {
        self.elements.get(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &MapElement)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }
}
