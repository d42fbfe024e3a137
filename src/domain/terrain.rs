//! Terrain model - the layer stack and mineral pocket templates
//!
//! Pure configuration for world generation. Compiled-in defaults match the
//! shipped game; a JSON bundle can replace them at runtime so content tuning
//! never requires an engine rebuild.

use serde::{Deserialize, Serialize};

use super::tiles::{LayerId, PocketKind};

/// Rows between the nominal surface line and the bottom of the grid
pub const SURFACE_OFFSET: u32 = 12;

/// Properties of one depth band
#[derive(Clone, Copy, Debug)]
pub struct LayerProps {
    /// Thickness in rows
    pub depth: u32,
    pub color: u32,
    /// Chance for a generated cell to hold a collectible
    pub item_chance: f32,
    /// Cave noise may carve this layer
    pub caves: bool,
}

/// Template for one mineral pocket kind
#[derive(Clone, Copy, Debug)]
pub struct PocketTemplate {
    pub kind: PocketKind,
    pub color: u32,
    pub size_min: u32,
    pub size_max: u32,
    /// Per-column spawn chance
    pub rarity: f32,
    /// Index into the layer stack; pockets center at or below this layer
    pub min_depth: usize,
    pub item_chance: f32,
}

/// Ordered layer stack (shallow to deep) plus pocket templates.
///
/// Invariant: the layer list is never empty; `from_bundle` rejects bundles
/// that would break this.
#[derive(Clone)]
pub struct TerrainModel {
    layers: Vec<(LayerId, LayerProps)>,
    pockets: Vec<PocketTemplate>,
}

impl TerrainModel {
    /// Built-in defaults
    pub fn from_generated() -> Self {
        Self {
            layers: vec![
                (
                    LayerId::Surface,
                    LayerProps {
                        depth: 2,
                        color: LayerId::Surface.default_color(),
                        item_chance: 0.3,
                        caves: false,
                    },
                ),
                (
                    LayerId::Dirt,
                    LayerProps {
                        depth: 3,
                        color: LayerId::Dirt.default_color(),
                        item_chance: 0.2,
                        caves: true,
                    },
                ),
                (
                    LayerId::Stone,
                    LayerProps {
                        depth: 4,
                        color: LayerId::Stone.default_color(),
                        item_chance: 0.15,
                        caves: true,
                    },
                ),
                (
                    LayerId::Mineral,
                    LayerProps {
                        depth: 4,
                        color: LayerId::Mineral.default_color(),
                        item_chance: 0.25,
                        caves: true,
                    },
                ),
                (
                    LayerId::Lava,
                    LayerProps {
                        depth: 6,
                        color: LayerId::Lava.default_color(),
                        item_chance: 0.05,
                        caves: false,
                    },
                ),
            ],
            pockets: vec![
                PocketTemplate {
                    kind: PocketKind::Gems,
                    color: PocketKind::Gems.default_color(),
                    size_min: 2,
                    size_max: 4,
                    rarity: 0.05,
                    min_depth: 2,
                    item_chance: 0.5,
                },
                PocketTemplate {
                    kind: PocketKind::Gold,
                    color: PocketKind::Gold.default_color(),
                    size_min: 2,
                    size_max: 5,
                    rarity: 0.04,
                    min_depth: 2,
                    item_chance: 0.6,
                },
                PocketTemplate {
                    kind: PocketKind::Tech,
                    color: PocketKind::Tech.default_color(),
                    size_min: 3,
                    size_max: 6,
                    rarity: 0.03,
                    min_depth: 3,
                    item_chance: 0.7,
                },
                PocketTemplate {
                    kind: PocketKind::Alien,
                    color: PocketKind::Alien.default_color(),
                    size_min: 2,
                    size_max: 3,
                    rarity: 0.02,
                    min_depth: 3,
                    item_chance: 0.8,
                },
            ],
        }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn layers(&self) -> &[(LayerId, LayerProps)] {
        &self.layers
    }

    pub fn pockets(&self) -> &[PocketTemplate] {
        &self.pockets
    }

    /// Row of the unperturbed surface line
    pub fn surface_row(&self, grid_height: u32) -> u32 {
        grid_height.saturating_sub(SURFACE_OFFSET).max(1)
    }

    /// First row governed by the layer at `index`, clamped above bedrock
    pub fn layer_start_row(&self, grid_height: u32, index: usize) -> u32 {
        let mut row = self.surface_row(grid_height);
        for (_, props) in self.layers.iter().take(index) {
            row += props.depth;
        }
        row.min(grid_height.saturating_sub(2))
    }

    /// Layer governing `row`. Walks the stack from the surface; rows past
    /// the end of the stack fall to the deepest layer.
    pub fn layer_for_row(&self, grid_height: u32, row: u32) -> (LayerId, LayerProps) {
        let mut threshold = self.surface_row(grid_height);
        for (id, props) in self.layers.iter() {
            threshold += props.depth;
            if row < threshold {
                return (*id, *props);
            }
        }
        self.layers[self.layers.len() - 1]
    }

    /// Serialize the active model for UI legends and tooling
    pub fn manifest_json(&self) -> String {
        let manifest = TerrainManifest {
            format_version: 1,
            layers: self
                .layers
                .iter()
                .map(|(id, props)| ManifestLayer {
                    key: id.key(),
                    depth: props.depth,
                    color: props.color,
                    item_chance: props.item_chance,
                    caves: props.caves,
                })
                .collect(),
            pockets: self
                .pockets
                .iter()
                .map(|p| ManifestPocket {
                    key: p.kind.key(),
                    color: p.color,
                    size_min: p.size_min,
                    size_max: p.size_max,
                    rarity: p.rarity,
                    min_depth: p.min_depth,
                    item_chance: p.item_chance,
                })
                .collect(),
        };
        serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        if bundle.layers.is_empty() {
            return Err("terrain bundle has no layers".to_string());
        }

        let mut layers: Vec<(LayerId, LayerProps)> = Vec::with_capacity(bundle.layers.len());
        for layer in bundle.layers.into_iter() {
            let id = LayerId::from_key(&layer.key)?;
            if layers.iter().any(|(existing, _)| *existing == id) {
                return Err(format!("duplicate layer key: {}", layer.key));
            }
            if layer.depth == 0 {
                return Err(format!("layer {} must be at least one row deep", layer.key));
            }
            let item_chance = chance_from_f64(layer.item_chance, "itemChance", &layer.key)?;
            layers.push((
                id,
                LayerProps {
                    depth: layer.depth,
                    color: layer.color,
                    item_chance,
                    caves: layer.caves,
                },
            ));
        }

        let mut pockets = Vec::with_capacity(bundle.pockets.len());
        for pocket in bundle.pockets.into_iter() {
            let kind = PocketKind::from_key(&pocket.key)?;
            let [size_min, size_max] = pocket.size_range;
            if size_min == 0 || size_min > size_max {
                return Err(format!("pocket {} has an invalid size range", pocket.key));
            }
            if pocket.min_depth >= layers.len() {
                return Err(format!(
                    "pocket {} minDepth {} is past the layer stack",
                    pocket.key, pocket.min_depth
                ));
            }
            let rarity = chance_from_f64(pocket.rarity, "rarity", &pocket.key)?;
            let item_chance = chance_from_f64(pocket.item_chance, "itemChance", &pocket.key)?;
            pockets.push(PocketTemplate {
                kind,
                color: pocket.color,
                size_min,
                size_max,
                rarity,
                min_depth: pocket.min_depth,
                item_chance,
            });
        }

        Ok(Self { layers, pockets })
    }
}

fn chance_from_f64(value: f64, field: &str, key: &str) -> Result<f32, String> {
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} out of range for {}: {}", field, key, value));
    }
    Ok(value as f32)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TerrainManifest {
    format_version: u32,
    layers: Vec<ManifestLayer>,
    pockets: Vec<ManifestPocket>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestLayer {
    key: &'static str,
    depth: u32,
    color: u32,
    item_chance: f32,
    caves: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestPocket {
    key: &'static str,
    color: u32,
    size_min: u32,
    size_max: u32,
    rarity: f32,
    min_depth: usize,
    item_chance: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    layers: Vec<BundleLayer>,
    #[serde(default)]
    pockets: Vec<BundlePocket>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleLayer {
    key: String,
    depth: u32,
    color: u32,
    item_chance: f64,
    #[serde(default)]
    caves: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundlePocket {
    key: String,
    color: u32,
    size_range: [u32; 2],
    rarity: f64,
    min_depth: usize,
    item_chance: f64,
}
