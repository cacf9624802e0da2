use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, MarkerPrimitive, PolylinePrimitive, Primitive, TextPrimitive};

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Drawing layer a primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Axis,
    Series,
    Label,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredPrimitive {
    pub layer: CanvasLayerKind,
    pub primitive: Primitive,
}

/// Backend-agnostic, ordered scene for one chart draw pass.
///
/// Primitives are replayed in insertion order, so later entries paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<LayeredPrimitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: CanvasLayerKind, primitive: Primitive) {
        self.primitives.push(LayeredPrimitive { layer, primitive });
    }

    #[must_use]
    pub fn with_primitive(mut self, layer: CanvasLayerKind, primitive: Primitive) -> Self {
        self.push(layer, primitive);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for entry in &self.primitives {
            entry.primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn layer(&self, kind: CanvasLayerKind) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(move |entry| entry.layer == kind)
            .map(|entry| &entry.primitive)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|entry| match &entry.primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.primitives.iter().filter_map(|entry| match &entry.primitive {
            Primitive::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerPrimitive> {
        self.primitives.iter().filter_map(|entry| match &entry.primitive {
            Primitive::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|entry| match &entry.primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render frame contract v1: {e}"))
        })
    }

    pub fn from_json_contract_str(input: &str) -> ChartResult<Self> {
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
