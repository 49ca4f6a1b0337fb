use serde::Serialize;

use crate::domain::entities::{Party, PartyMember, TreasureBundle};

/// JSON body returned by `GET /generate-party`
#[derive(Debug, Serialize)]
pub struct PartyResponseDto {
    pub party: Vec<PartyMemberDto>,
    pub shared_treasure: TreasureDto,
    pub mounts: String,
    pub quest: String,
}

#[derive(Debug, Serialize)]
pub struct PartyMemberDto {
    pub name: String,
    pub kindred: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i32,
    pub alignment: String,
    pub trinket: String,
}

#[derive(Debug, Serialize)]
pub struct TreasureDto {
    pub cp: i32,
    pub sp: i32,
    pub gp: i32,
    pub gems: i32,
    pub art_objects: i32,
}

impl From<PartyMember> for PartyMemberDto {
    fn from(m: PartyMember) -> Self {
        Self {
            name: m.name,
            kindred: m.kindred,
            class_name: m.class_name,
            level: m.level,
            alignment: m.alignment,
            trinket: if m.has_trinket {
                "Random trinket".to_string()
            } else {
                "None".to_string()
            },
        }
    }
}

impl From<TreasureBundle> for TreasureDto {
    fn from(t: TreasureBundle) -> Self {
        Self {
            cp: t.cp,
            sp: t.sp,
            gp: t.gp,
            gems: t.gems,
            art_objects: t.art_objects,
        }
    }
}

impl From<Party> for PartyResponseDto {
    fn from(p: Party) -> Self {
        Self {
            party: p.members.into_iter().map(PartyMemberDto::from).collect(),
            shared_treasure: TreasureDto::from(p.treasure),
            mounts: p.mounts.as_str().to_string(),
            quest: p.quest,
        }
    }
}
