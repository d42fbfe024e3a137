//! Tile data for the mining world
//!
//! Every in-bounds grid cell holds exactly one `Tile`. Metadata (layer,
//! pocket kind, color, item flag) lives inside the variant, so states like
//! "air with a leftover item flag" are unrepresentable.

/// Tile edge length in pixels. Generation, collision math and the renderer
/// all share this value.
pub const TILE_SIZE: u32 = 32;

/// Tile kind codes for the JS ABI
pub type TileKindId = u8;
pub const TK_AIR: TileKindId = 0;
pub const TK_GROUND: TileKindId = 1;
pub const TK_BEDROCK: TileKindId = 2;
pub const TK_POCKET: TileKindId = 3;
/// Sentinel for "no tile here" (out-of-bounds reads at the ABI boundary)
pub const TK_NONE: TileKindId = 255;

// Colors in ABGR format (little-endian bytes [RR,GG,BB,AA]) for direct
// canvas copy.
pub(crate) const COLOR_AIR: u32 = 0xFF2A1A0F;
pub(crate) const COLOR_BEDROCK: u32 = 0xFF332B2B;

const COLOR_SURFACE: u32 = 0xFF30BE6A;
const COLOR_DIRT: u32 = 0xFF3A5579;
const COLOR_STONE: u32 = 0xFF766A6A;
const COLOR_MINERAL: u32 = 0xFFA0863A;
const COLOR_LAVA: u32 = 0xFF235AE0;

const COLOR_GEMS: u32 = 0xFFD355BA;
const COLOR_GOLD: u32 = 0xFF28C8FF;
const COLOR_TECH: u32 = 0xFFE6DC50;
const COLOR_ALIEN: u32 = 0xFF78FF88;

/// Depth band identity, shallow to deep
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayerId {
    Surface,
    Dirt,
    Stone,
    Mineral,
    Lava,
}

impl LayerId {
    pub fn key(self) -> &'static str {
        match self {
            LayerId::Surface => "surface",
            LayerId::Dirt => "dirt",
            LayerId::Stone => "stone",
            LayerId::Mineral => "mineral",
            LayerId::Lava => "lava",
        }
    }

    pub(crate) fn from_key(key: &str) -> Result<Self, String> {
        match key {
            "surface" => Ok(LayerId::Surface),
            "dirt" => Ok(LayerId::Dirt),
            "stone" => Ok(LayerId::Stone),
            "mineral" => Ok(LayerId::Mineral),
            "lava" => Ok(LayerId::Lava),
            _ => Err(format!("unknown layer key: {}", key)),
        }
    }

    pub fn default_color(self) -> u32 {
        match self {
            LayerId::Surface => COLOR_SURFACE,
            LayerId::Dirt => COLOR_DIRT,
            LayerId::Stone => COLOR_STONE,
            LayerId::Mineral => COLOR_MINERAL,
            LayerId::Lava => COLOR_LAVA,
        }
    }
}

/// Mineral pocket identity
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PocketKind {
    Gems,
    Gold,
    Tech,
    Alien,
}

impl PocketKind {
    pub fn key(self) -> &'static str {
        match self {
            PocketKind::Gems => "gems",
            PocketKind::Gold => "gold",
            PocketKind::Tech => "tech",
            PocketKind::Alien => "alien",
        }
    }

    pub(crate) fn from_key(key: &str) -> Result<Self, String> {
        match key {
            "gems" => Ok(PocketKind::Gems),
            "gold" => Ok(PocketKind::Gold),
            "tech" => Ok(PocketKind::Tech),
            "alien" => Ok(PocketKind::Alien),
            _ => Err(format!("unknown pocket key: {}", key)),
        }
    }

    pub fn default_color(self) -> u32 {
        match self {
            PocketKind::Gems => COLOR_GEMS,
            PocketKind::Gold => COLOR_GOLD,
            PocketKind::Tech => COLOR_TECH,
            PocketKind::Alien => COLOR_ALIEN,
        }
    }
}

/// One cell of the world grid
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tile {
    Air,
    Bedrock,
    Ground { layer: LayerId, color: u32, has_item: bool },
    Pocket { kind: PocketKind, color: u32, has_item: bool },
}

impl Tile {
    pub fn kind_id(&self) -> TileKindId {
        match self {
            Tile::Air => TK_AIR,
            Tile::Ground { .. } => TK_GROUND,
            Tile::Bedrock => TK_BEDROCK,
            Tile::Pocket { .. } => TK_POCKET,
        }
    }

    /// Solid tiles block the robot
    pub fn is_solid(&self) -> bool {
        matches!(self, Tile::Ground { .. } | Tile::Bedrock | Tile::Pocket { .. })
    }

    /// Only ground and pockets can be dug out; bedrock is immutable
    pub fn is_diggable(&self) -> bool {
        matches!(self, Tile::Ground { .. } | Tile::Pocket { .. })
    }

    pub fn has_item(&self) -> bool {
        match self {
            Tile::Ground { has_item, .. } | Tile::Pocket { has_item, .. } => *has_item,
            _ => false,
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            Tile::Air => COLOR_AIR,
            Tile::Bedrock => COLOR_BEDROCK,
            Tile::Ground { color, .. } | Tile::Pocket { color, .. } => *color,
        }
    }

    /// Key the inventory collaborator uses to name a find
    pub fn source_key(&self) -> &'static str {
        match self {
            Tile::Air => "air",
            Tile::Bedrock => "bedrock",
            Tile::Ground { layer, .. } => layer.key(),
            Tile::Pocket { kind, .. } => kind.key(),
        }
    }

    /// Default tile for a kind code when the cell carries no reusable
    /// metadata (a fresh set after clearing to air)
    pub(crate) fn fresh(kind: TileKindId, has_item: bool) -> Tile {
        match kind {
            TK_GROUND => Tile::Ground {
                layer: LayerId::Dirt,
                color: LayerId::Dirt.default_color(),
                has_item,
            },
            TK_POCKET => Tile::Pocket {
                kind: PocketKind::Gems,
                color: PocketKind::Gems.default_color(),
                has_item,
            },
            TK_BEDROCK => Tile::Bedrock,
            _ => Tile::Air,
        }
    }
}
