//! Party service - composes one complete adventuring party per invocation
//!
//! Every draw goes through a dice expression resolved against the range
//! tables in the `ContentStore`. The party shares a single alignment roll,
//! a single level-tier roll, one treasure bundle, one mounts outcome, and
//! one quest; kindred, class, level, name, and trinket are per member.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::entities::{Mounts, Party, PartyMember, TreasureBundle};
use crate::domain::errors::GenerationError;
use crate::domain::value_objects::DiceFormula;
use crate::infrastructure::content::ContentStore;

// Dice expressions fixed by the generation rules
const PARTY_SIZE_DICE: &str = "1d4+4";
const ALIGNMENT_DICE: &str = "1d6";
const LEVEL_TIER_DICE: &str = "1d6";
const KINDRED_DICE: &str = "1d12";
const CLASS_DICE: &str = "1d20";
const HIGHER_LEVEL_DICE: &str = "1d6+3";
const STANDARD_LEVEL_DICE: &str = "1d3";
const COIN_DICE: &str = "1d100";
const VALUABLES_DICE: &str = "1d4";
const TRINKET_DICE: &str = "1d6";

/// A tier roll of 6 puts the whole party on the higher level range
const HIGHER_TIER_FACE: i32 = 6;
/// A trinket roll of 2 or less grants the member a trinket
const TRINKET_THRESHOLD: i32 = 2;

const VALUABLES_CHANCE: f64 = 0.1;
const MOUNTS_CHANCE: f64 = 0.75;

/// Party service trait defining the generation use case
pub trait PartyService: Send + Sync {
    /// Generate one complete party
    fn generate_party(&self) -> Result<Party, GenerationError>;
}

/// Default implementation drawing entropy from the thread-local RNG
pub struct PartyServiceImpl {
    content: Arc<ContentStore>,
}

impl PartyServiceImpl {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self { content }
    }

    /// Generate a party against an explicit random source
    ///
    /// Production callers go through [`PartyService::generate_party`];
    /// tests pass a seeded generator to make every draw reproducible.
    pub fn generate_party_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Party, GenerationError> {
        let party_size = DiceFormula::parse(PARTY_SIZE_DICE)?.roll(rng);

        let alignment_roll = DiceFormula::parse(ALIGNMENT_DICE)?.roll(rng);
        let alignment = self
            .content
            .alignments
            .resolve(alignment_roll)
            .ok_or(GenerationError::TableLookupMiss {
                table: "alignments",
                roll: alignment_roll,
            })?
            .to_string();

        let tier_roll = DiceFormula::parse(LEVEL_TIER_DICE)?.roll(rng);
        let is_higher_level = tier_roll == HIGHER_TIER_FACE;

        debug!(
            "Composing party: {} members, {} alignment, higher tier: {}",
            party_size, alignment, is_higher_level
        );

        let mut used_names = HashSet::new();
        let mut members = Vec::with_capacity(party_size as usize);
        for _ in 0..party_size {
            members.push(self.generate_member(
                rng,
                &alignment,
                is_higher_level,
                &mut used_names,
            )?);
        }

        let treasure = TreasureBundle {
            cp: DiceFormula::parse(COIN_DICE)?.roll(rng),
            sp: DiceFormula::parse(COIN_DICE)?.roll(rng),
            gp: DiceFormula::parse(COIN_DICE)?.roll(rng),
            gems: self.roll_valuables(rng)?,
            art_objects: self.roll_valuables(rng)?,
        };

        let mounts = if rng.gen_bool(MOUNTS_CHANCE) {
            Mounts::RidingHorses
        } else {
            Mounts::None
        };

        let trinket_dice = DiceFormula::parse(TRINKET_DICE)?;
        for member in &mut members {
            member.has_trinket = trinket_dice.roll(rng) <= TRINKET_THRESHOLD;
        }

        let quest = self
            .content
            .quests
            .get(&alignment)
            .and_then(|list| list.choose(rng))
            .ok_or_else(|| GenerationError::MissingReferenceEntry {
                table: "quests",
                key: alignment.clone(),
            })?
            .clone();

        Ok(Party {
            members,
            treasure,
            mounts,
            quest,
        })
    }

    fn generate_member<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        alignment: &str,
        is_higher_level: bool,
        used_names: &mut HashSet<String>,
    ) -> Result<PartyMember, GenerationError> {
        let kindred_roll = DiceFormula::parse(KINDRED_DICE)?.roll(rng);
        let kindred_key = self
            .content
            .adventurer_kindred
            .resolve(kindred_roll)
            .ok_or(GenerationError::TableLookupMiss {
                table: "adventurer_kindred",
                roll: kindred_roll,
            })?
            .to_string();
        let kindred = self.content.kindreds.get(&kindred_key).ok_or_else(|| {
            GenerationError::MissingReferenceEntry {
                table: "kindreds",
                key: kindred_key.clone(),
            }
        })?;

        let class_roll = DiceFormula::parse(CLASS_DICE)?.roll(rng);
        let class_name = kindred
            .class_table
            .resolve(class_roll)
            .ok_or(GenerationError::TableLookupMiss {
                table: "adventurer_class_table",
                roll: class_roll,
            })?
            .to_string();

        let level = if is_higher_level {
            DiceFormula::parse(HIGHER_LEVEL_DICE)?.roll(rng)
        } else {
            DiceFormula::parse(STANDARD_LEVEL_DICE)?.roll(rng)
        };

        let name = self.unique_name(rng, &kindred_key, used_names)?;

        Ok(PartyMember {
            name,
            kindred: kindred.name.clone(),
            class_name,
            level,
            alignment: alignment.to_string(),
            // Trinkets are rolled for the whole party after mounts
            has_trinket: false,
        })
    }

    /// Rejection-sample first+surname pairs until one is unused in this party
    ///
    /// The loop is unbounded but terminates almost surely; the name pools
    /// carry far more combinations than the maximum party size, so retries
    /// stay rare in practice.
    fn unique_name<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kindred_key: &str,
        used_names: &mut HashSet<String>,
    ) -> Result<String, GenerationError> {
        let pool = self.content.names.get(kindred_key).ok_or_else(|| {
            GenerationError::MissingReferenceEntry {
                table: "names",
                key: kindred_key.to_string(),
            }
        })?;

        loop {
            let first = pool.first_names.choose(rng).ok_or_else(|| {
                GenerationError::MissingReferenceEntry {
                    table: "names",
                    key: kindred_key.to_string(),
                }
            })?;
            let surname = pool.surnames.choose(rng).ok_or_else(|| {
                GenerationError::MissingReferenceEntry {
                    table: "names",
                    key: kindred_key.to_string(),
                }
            })?;
            let full_name = format!("{} {}", first, surname);
            if used_names.insert(full_name.clone()) {
                return Ok(full_name);
            }
        }
    }

    fn roll_valuables<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i32, GenerationError> {
        if rng.gen_bool(VALUABLES_CHANCE) {
            Ok(DiceFormula::parse(VALUABLES_DICE)?.roll(rng))
        } else {
            Ok(0)
        }
    }
}

impl PartyService for PartyServiceImpl {
    fn generate_party(&self) -> Result<Party, GenerationError> {
        self.generate_party_with(&mut rand::thread_rng())
    }
}
