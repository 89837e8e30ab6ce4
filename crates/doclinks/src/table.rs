//! The name → documentation page table.

use crate::error::LinkTableError;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Names of the API reference, grouped by the page they document.
/// Paths are relative to the site's `docs/` directory.
const BUILTIN_ENTRIES: &[(&[&str], &str)] = &[
    (&["Body", "Bodies"], "types/nape/phys/Body.html"),
    (&["Shape", "Shapes"], "types/nape/shape/Shape.html"),
    (&["Constraint", "Constraints"], "types/nape/constraint/Constraint.html"),
    (&["Compound", "Compounds"], "types/nape/phys/Compound.html"),
    (&["CbType", "CbTypes"], "types/nape/callbacks/CbType.html"),
    (&["CbEvent", "CbEvents"], "types/nape/callbacks/CbEvent.html"),
    (&["OptionType", "OptionTypes"], "types/nape/callbacks/OptionType.html"),
    (&["Material", "Materials"], "types/nape/phys/Material.html"),
    (&["Circle", "Circles"], "types/nape/shape/Circle.html"),
    (&["Polygon", "Polygons"], "types/nape/shape/Polygon.html"),
    (&["GeomPoly", "GeomPolys"], "types/nape/geom/GeomPoly.html"),
    (&["MarchingSquares"], "types/nape/geom/MarchingSquares.html"),
    (&["ForcedSleep"], "types/nape/hacks/ForcedSleep.html"),
    (&["nape-hacks"], "index.html#mod-nape-hacks"),
    (&["PivotJoint"], "types/nape/constraint/PivotJoint.html"),
    (&["DistanceJoint"], "types/nape/constraint/DistanceJoint.html"),
    (&["AngleJoint"], "types/nape/constraint/AngleJoint.html"),
    (&["MotorJoint"], "types/nape/constraint/MotorJoint.html"),
    (&["LineJoint"], "types/nape/constraint/LineJoint.html"),
    (&["WeldJoint"], "types/nape/constraint/WeldJoint.html"),
    (&["UserConstraint", "UserConstraints"], "types/nape/constraint/UserConstraint.html"),
    (&["nape-symbolic"], "index.html#mod-nape-symbolic"),
    (&["SymbolicConstraint"], "types/nape/symbolic/SymbolicConstraint.html"),
    (&["Listener", "Listeners"], "types/nape/callbacks/Listener.html"),
    (&["BodyListener", "BodyListeners"], "types/nape/callbacks/BodyListener.html"),
    (&["InteractionListener", "InteractionListeners"], "types/nape/callbacks/InteractionListener.html"),
    (&["ConstraintListener", "ConstraintListeners"], "types/nape/callbacks/ConstraintListener.html"),
    (&["PreListener", "PreListeners"], "types/nape/callbacks/PreListener.html"),
    (&["Geom"], "types/nape/geom/Geom.html"),
    (&["BitmapDebug"], "types/nape/util/BitmapDebug.html"),
    (&["ShapeDebug"], "types/nape/util/ShapeDebug.html"),
    (&["Vec2", "Vec2s"], "types/nape/geom/Vec2.html"),
    (&["Vec3", "Vec3s"], "types/nape/geom/Vec3.html"),
    (&["Space"], "types/nape/space/Space.html"),
    (&["Debug"], "types/nape/util/Debug.html"),
    (&["Edge", "Edges"], "types/nape/shape/Edge.html"),
    (&["Mat23"], "types/nape/geom/Mat23.html"),
    (&["Callback"], "types/nape/callbacks/Callback.html"),
    (&["Arbiter", "Arbiters"], "types/nape/dynamics/Arbiter.html"),
    (&["FluidArbiter", "FluidArbiters"], "types/nape/dynamics/Arbiter.html"),
    (&["CollisionArbiter", "CollisionArbiters"], "types/nape/dynamics/Arbiter.html"),
    (&["Contact", "Contacts"], "types/nape/dynamics/Contact.html"),
    (&["FluidProperties"], "types/nape/phys/FluidProperties.html"),
    (&["InteractionFilter", "InteractionFilters"], "types/nape/dynamics/InteractionFilter.html"),
    (&["InteractionGroup", "InteractionGroups"], "types/nape/dynamics/InteractionGroup.html"),
    (&["Vec2List", "Vec2Lists"], "types/nape/geom/Vec2List.html"),
    (&["CbTypeList", "CbTypeLists"], "types/nape/callbacks/CbTypeList.html"),
    (&["BodyCallback"], "types/nape/callbacks/BodyCallback.html"),
    (&["InteractionCallback", "InteractionCallbacks"], "types/nape/callbacks/InteractionCallback.html"),
    (&["InteractionType"], "types/nape/callbacks/InteractionType.html"),
    (&["ConstraintCallback"], "types/nape/callbacks/ConstraintCallback.html"),
    (&["PreCallback", "PreCallbacks"], "types/nape/callbacks/PreCallback.html"),
    (&["PreFlag"], "types/nape/callbacks/PreFlag.html"),
    (&["Interactor", "Interactors"], "types/nape/phys/Interactor.html"),
];

static BUILTIN: Lazy<Arc<LinkTable>> = Lazy::new(|| {
    let links = BUILTIN_ENTRIES
        .iter()
        .flat_map(|(names, path)| names.iter().map(move |name| (name.to_string(), path.to_string())))
        .collect();
    Arc::new(LinkTable { links })
});

/// Immutable map from a friendly name to a page path relative to `docs/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkTable {
    links: BTreeMap<String, String>,
}

impl LinkTable {
    /// The site's API reference table, built on first use.
    pub fn builtin() -> &'static LinkTable {
        Lazy::force(&BUILTIN).as_ref()
    }

    /// A handle on the built-in table; every handle points at the same table.
    pub fn shared_builtin() -> Arc<LinkTable> {
        Arc::clone(Lazy::force(&BUILTIN))
    }

    /// Reads a JSON object of `"Name": "path/to/Page.html"` pairs.
    pub fn from_json(source: &str) -> Result<Self, LinkTableError> {
        let links: BTreeMap<String, String> = serde_json::from_str(source)?;
        Ok(Self { links })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinkTableError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LinkTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Adds the entries of `other`, replacing entries with the same name.
    pub fn extend(&mut self, other: LinkTable) {
        self.links.extend(other.links);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for LinkTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}
