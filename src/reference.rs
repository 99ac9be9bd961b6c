//! Reference constellation catalog.
//!
//! The full table of 109 clusters: five crossroads anchors followed by every
//! tier-one, tier-two and tier-three constellation with its requirement,
//! completion bonus and member layout. It is the catalog the Python bindings
//! serve and the one the integration tests plan against.
//!
//! Member names are unique across the table; where two stars of one
//! constellation share a display name the second carries a ` II` suffix.
//!
//! Every star lists the attribute effects it grants. Whole numbers are flat
//! values, fractions are percentages (stored as whole percents), and an
//! `a..b` damage span is recorded as its flat midpoint.
//!
//! ```rust
//! use devotion_core::reference;
//!
//! let catalog = reference::catalog().unwrap();
//! assert_eq!(catalog.clusters().len(), 109);
//! assert_eq!(catalog.anchors().len(), 5);
//! ```

use crate::affinity::AffinityKind;
use crate::affinity::AffinityKind::{
    Ascendant as A, Chaos as C, Eldritch as E, Order as O, Primordial as P,
};
use crate::catalog::AttributeValue::{self, Flat as F, Percent as Pct};
use crate::catalog::{Catalog, ClusterSpec, NodeSpec};
use crate::error::CatalogError;

/// Name, rank, branch and attribute effects of one member star.
struct Member(&'static str, u8, Option<u8>, &'static [(&'static str, AttributeValue)]);

/// Name, tier, requirement, bonus and members of one constellation.
struct Entry(
    &'static str,
    u8,
    &'static [(AffinityKind, u8)],
    &'static [(AffinityKind, u8)],
    &'static [Member],
);

/// Crossroads anchors: kind granted and the attribute the single star carries.
const ANCHORS: [(AffinityKind, &str, AttributeValue); 5] = [
    (A, "Offensive Ability", F(18.0)),
    (C, "Health", Pct(5.0)),
    (E, "Offensive Ability", F(18.0)),
    (O, "Health", Pct(5.0)),
    (P, "Defensive Ability", F(18.0)),
];

#[rustfmt::skip]
static CONSTELLATIONS: &[Entry] = &[
    Entry("Tortoise", 1, &[(O, 1)], &[(P, 3), (O, 2)], &[
        Member("First Tortoise Star", 0, None, &[
            ("Health", F(25.0)), ("Defensive Ability", F(12.0)),
        ]),
        Member("Second Tortoise Star", 1, None, &[
            ("Defensive Ability", F(15.0)), ("Physique Requirement For Shields", Pct(10.0)),
        ]),
        Member("Third Tortoise Star", 2, None, &[
            ("Health", F(100.0)), ("Defensive Ability", F(15.0)),
        ]),
        Member("Fourth Tortoise Star", 3, Some(1), &[
            ("Health", Pct(4.0)), ("Defensive Ability", F(10.0)), ("Armor", Pct(4.0)),
        ]),
        Member("Turtle Shell", 3, Some(3), &[
            ("Seconds Skill Recharge", F(12.0)), ("Damage Absorption", F(5150.0)),
        ]),
    ]),
    Entry("Sailor Guide", 1, &[(P, 1)], &[(P, 5)], &[
        Member("First Sailors Guide Star", 0, None, &[
            ("Physique", F(15.0)), ("Defensive Ability", F(8.0)),
        ]),
        Member("Second Sailors Guide Star", 1, None, &[
            ("Reduced Freeze Duration", Pct(18.0)), ("Slow Resistance", Pct(18.0)),
        ]),
        Member("Third Sailors Guide Star", 2, Some(1), &[
            ("Physical Resistance", Pct(3.0)), ("Cold Resistance", Pct(15.0)),
            ("Lightining Resistance", Pct(15.0)),
        ]),
        Member("Fourth Sailors Guide Star", 2, Some(2), &[
            ("Physique", F(15.0)), ("Movement Speed", Pct(8.0)),
        ]),
    ]),
    Entry("Tsunami", 1, &[(P, 1)], &[(P, 5)], &[
        Member("First Tsunami Star", 0, None, &[
            ("Cold Damage", Pct(15.0)), ("Lightining Damage", Pct(15.0)),
        ]),
        Member("Second Tsunami Star", 1, None, &[
            ("Spirit", F(15.0)), ("Defensive Ability", F(10.0)),
        ]),
        Member("Third Tsunami Star", 2, None, &[
            ("Electrocute Damage", Pct(40.0)), ("Physique", F(15.0)),
        ]),
        Member("Fourth Tsunami Star", 3, None, &[
            ("Cold Damage", Pct(24.0)), ("Lightining Damage", Pct(12.0)),
        ]),
        Member("Tsunami skill", 4, None, &[
            ("Seconds Skill Recharge", F(1.0)), ("Meter Range", F(12.0)),
            ("Weapon Damage", Pct(34.0)), ("Cold Damage", F(197.5)),
            ("Lightining Damage", F(106.0)), ("Chance for Target to Fumble Attacks", Pct(14.0)),
            ("Chance of Impaired Aim to Target", Pct(14.0)),
        ]),
    ]),
    Entry("Imp", 1, &[(P, 1)], &[(P, 3), (E, 3)], &[
        Member("First Imp Star", 0, None, &[
            ("Fire Damage", Pct(15.0)), ("Aether Damage", Pct(15.0)),
        ]),
        Member("Second Imp Star", 1, None, &[("Spirit", F(15.0)), ("Defensive Ability", F(10.0))]),
        Member("Third Imp Star", 2, None, &[
            ("Aether Resistance", Pct(8.0)), ("Physique", F(15.0)),
        ]),
        Member("Fourth Imp Star", 3, None, &[
            ("Fire Damage", Pct(24.0)), ("Aether Damage", Pct(24.0)),
        ]),
        Member("Aetherfire", 4, None, &[
            ("Second Duration", F(3.0)), ("Meter Radius", Pct(250.0)), ("Fire Damage", F(140.0)),
            ("Aether Damage", F(165.0)), ("Chance to Confuse", Pct(33.0)),
            ("Chance to Confuse", F(2.0)),
        ]),
    ]),
    Entry("Falcon", 1, &[(A, 1)], &[(A, 3), (E, 3)], &[
        Member("First Falcon Star", 0, None, &[
            ("Physical Damage", Pct(15.0)), ("Bleeding Damage", Pct(15.0)),
        ]),
        Member("Second Falcon Star", 1, None, &[
            ("Health", F(60.0)), ("Offensive Ability", F(15.0)),
        ]),
        Member("Third Falcon Star", 2, None, &[("Cunning", F(20.0))]),
        Member("Fourth Falcon Star", 3, None, &[
            ("Physical Damage", Pct(24.0)), ("Bleeding Damage", Pct(24.0)),
        ]),
        Member("Falcon Swoop", 4, None, &[
            ("Meter Radius", Pct(10.0)), ("Seconds Skill Recharge", F(2.0)),
            ("Projectiles", F(6.0)), ("Weapon Damage", Pct(24.0)), ("Physical Damage", F(116.0)),
            ("Bleeding Damage", F(525.0)), ("Chance to pass through Enemies", Pct(100.0)),
        ]),
    ]),
    Entry("Rat", 1, &[(C, 1)], &[(E, 3), (C, 2)], &[
        Member("First Rat Star", 0, None, &[("Cunning", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Rat Star", 1, None, &[
            ("Poison Damage", F(40.0)), ("Poison Damage", Pct(24.0)),
            ("Acid Retaliation", F(20.0)),
        ]),
        Member("Third Rat Star", 2, None, &[
            ("Cunning", F(20.0)), ("Spirit", F(20.0)), ("Acid Retaliation", F(30.0)),
            ("Poison and Acid Resistance", Pct(10.0)),
        ]),
        Member("Fourth Rat Star", 3, None, &[
            ("Poison Damage", F(60.0)), ("Poison Damage", Pct(50.0)),
            ("to All Retaliation Damage", Pct(25.0)),
        ]),
    ]),
    Entry("Crane", 1, &[(O, 1)], &[(O, 5)], &[
        Member("First Crane Star", 0, None, &[("Physique", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Crane Star", 1, None, &[
            ("Poison and Acid Resistance", Pct(12.0)),
            ("pets Poison and Acid Resistance", F(12.0)),
        ]),
        Member("Third Crane Star", 2, None, &[
            ("to All Damage", Pct(15.0)), ("Spirit req weapons", Pct(10.0)),
        ]),
        Member("Fourth Crane Star", 3, None, &[
            ("Vitality Resistance", Pct(12.0)), ("pets Vitality Resistance", Pct(12.0)),
        ]),
        Member("Fifth Crane Star", 4, None, &[
            ("Elemental Resistance", Pct(16.0)), ("Bleeding Resistance", Pct(16.0)),
            ("Reflected Damage Reduction", Pct(22.0)),
        ]),
    ]),
    Entry("Lion", 1, &[(O, 1)], &[(O, 3)], &[
        Member("First Lion Star", 0, None, &[
            ("Health", Pct(4.0)), ("pets Health", Pct(3.0)), ("Defensive Ability", F(8.0)),
        ]),
        Member("Second Lion Star", 1, None, &[
            ("Spirit", F(15.0)), ("Movement Speed", Pct(3.0)), ("Health", F(100.0)),
        ]),
        Member("Third Lion Star", 2, None, &[
            ("to All Damage", Pct(15.0)), ("Physical Resistance", Pct(2.0)),
            ("pets to All Damage", Pct(12.0)),
        ]),
    ]),
    Entry("Bull", 1, &[(P, 1)], &[(P, 3), (O, 2)], &[
        Member("First Bull Star", 0, None, &[("Physique", F(15.0))]),
        Member("Second Bull Star", 1, None, &[
            ("Internal Trauma Damage", Pct(24.0)), ("Movement Speed", Pct(3.0)),
        ]),
        Member("Third Bull Star", 2, None, &[("Physique", F(15.0)), ("Armor", F(30.0))]),
        Member("Fourth Bull Star", 3, Some(1), &[
            ("Internal Trauma Damage", F(60.0)), ("Internal Trauma Damage", Pct(30.0)),
            ("Physique Requirement for Armor", Pct(-10.0)),
        ]),
        Member("Bull Rush", 3, Some(2), &[
            ("Seconds Skill Recharge", Pct(40.0)), ("Meter Target Area", Pct(350.0)),
            ("Weapon Damage", Pct(32.0)), ("Physical Damage", F(172.5)),
            ("Internal Trauma Damage", F(350.0)),
        ]),
    ]),
    Entry("Hound", 1, &[(P, 1)], &[(P, 4)], &[
        Member("First Hound Star", 0, None, &[("Physique", F(15.0)), ("pets Health", Pct(4.0))]),
        Member("Second Hound Star", 1, None, &[
            ("Armor", Pct(2.0)), ("to All Retaliation Damage", Pct(30.0)),
        ]),
        Member("Third Hound Star", 2, None, &[
            ("Physique", F(20.0)), ("Armor", Pct(5.0)), ("to All Retaliation Damage", Pct(40.0)),
            ("pets Health", Pct(8.0)),
        ]),
    ]),
    Entry("Scarab", 1, &[(P, 1)], &[(P, 3), (O, 2)], &[
        Member("First Scarab Star", 0, None, &[("Physique", F(15.0)), ("Armor", F(20.0))]),
        Member("Second Scarab Star", 1, None, &[("Shield Damage Blocked", Pct(8.0))]),
        Member("Third Scarab Star", 2, Some(1), &[
            ("Bleeding Resistance", Pct(15.0)), ("Armor", Pct(4.0)),
        ]),
        Member("Fourth Scarab Star", 2, Some(2), &[
            ("Reduced Stun Duration", Pct(15.0)), ("Shield Damage Blocked", Pct(12.0)),
            ("Acid Retaliation", F(40.0)),
        ]),
    ]),
    Entry("Gallows", 1, &[(P, 1)], &[(P, 5)], &[
        Member("First Gallows Star", 0, None, &[
            ("Vitality Damage", Pct(15.0)), ("Chaos Damage", Pct(15.0)),
        ]),
        Member("Second Gallows Star", 1, None, &[
            ("Health", Pct(3.0)), ("Bleeding Resistance", Pct(10.0)),
        ]),
        Member("Third Gallows Star", 2, None, &[
            ("Health", F(80.0)), ("Vitality Resistance", Pct(10.0)),
        ]),
        Member("Fourth Gallows Star", 3, None, &[
            ("Vitality Damage", F(8.0)), ("Vitality Damage", Pct(24.0)),
            ("Chaos Damage", Pct(24.0)), ("Damage to Humans", Pct(6.0)),
        ]),
    ]),
    Entry("Lizard", 1, &[(P, 1)], &[(P, 4)], &[
        Member("First Lizard Star", 0, None, &[
            ("Health Regenerated Per Second", F(6.0)), ("Constitution", Pct(15.0)),
        ]),
        Member("Second Lizard Star", 1, None, &[
            ("Health Regenerated Per Second", F(10.0)), ("Health", F(50.0)),
            ("Movement Speed", Pct(3.0)),
        ]),
        Member("Third Lizard Star", 2, None, &[
            ("Health", F(50.0)), ("Healing Effects Increased", Pct(3.0)),
            ("Increases Health Regeneration", Pct(25.0)),
        ]),
    ]),
    Entry("Viper", 1, &[(C, 1)], &[(P, 3), (C, 2)], &[
        Member("First Viper Star", 0, None, &[("Cunning", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Viper Star", 1, None, &[
            ("Energy Leech Chance", F(36.0)), ("Energy Absorbed From Enemy Spells", Pct(10.0)),
        ]),
        Member("Third Viper Star", 2, None, &[("Vitality Resistance", Pct(10.0))]),
        Member("Fourth Viper Star", 3, None, &[
            ("Reduced target Elemental Resistances", F(20.0)), ("Offensive Ability", Pct(3.0)),
        ]),
    ]),
    Entry("Jackal", 1, &[(C, 1)], &[(C, 3)], &[
        Member("First Jackal Star", 0, None, &[("Energy", Pct(6.0)), ("pets Health", Pct(3.0))]),
        Member("Second Jackal Star", 1, None, &[
            ("Offensive Ability", F(12.0)), ("Total Speed", Pct(6.0)),
        ]),
        Member("Third Jackal Star", 2, None, &[
            ("to All Damage", Pct(15.0)), ("Physical Resistance", Pct(2.0)),
            ("pets Attack Speed", Pct(5.0)),
        ]),
    ]),
    Entry("Wretch", 1, &[(C, 1)], &[(P, 3), (C, 2)], &[
        Member("First Wretch Star", 0, None, &[
            ("Acid Damage", Pct(15.0)), ("Chaos Damage", Pct(15.0)),
        ]),
        Member("Second Wretch Star", 1, None, &[
            ("Physique", F(15.0)), ("Bleeding Resistance", Pct(12.0)),
        ]),
        Member("Third Wretch Star", 2, None, &[
            ("Health", F(80.0)), ("Defensive Ability", F(15.0)), ("Acid Retaliation", F(30.0)),
        ]),
        Member("Fourth Wretch Star", 3, None, &[
            ("Damage to Undead", Pct(6.0)), ("Acid Damage", Pct(24.0)),
            ("Chaos Damage", Pct(24.0)),
        ]),
    ]),
    Entry("Bat", 1, &[(E, 1)], &[(E, 3), (C, 2)], &[
        Member("First Bat Star", 0, None, &[
            ("Vitality Damage", Pct(15.0)), ("Bleeding Damage", Pct(15.0)),
        ]),
        Member("Second Bat Star", 1, None, &[
            ("Vitality Decay", Pct(30.0)), ("Offensive Ability", F(10.0)),
        ]),
        Member("Third Bat Star", 2, None, &[
            ("Vitality Damage", Pct(24.0)), ("Bleeding Damage", Pct(30.0)),
        ]),
        Member("Fourth Bat Star", 3, None, &[
            ("Vitality Damage", F(6.0)), ("of Attack Damage Converted To Health", Pct(3.0)),
        ]),
        Member("Twin Fangs", 4, None, &[
            ("Seconds Skill Recharge", Pct(60.0)), ("Projectiles", F(2.0)),
            ("Weapon Damage", Pct(22.0)), ("Pierce Damage", F(165.0)),
            ("Vitality Damage", F(174.5)), ("of Attack Damage Converted To Health", Pct(40.0)),
            ("Chance to pass through Enemies", Pct(100.0)),
        ]),
    ]),
    Entry("Eye Of The Guardian", 1, &[(E, 1)], &[(A, 3), (E, 3)], &[
        Member("First Eye Of The Guardian Star", 0, None, &[
            ("Acid Damage", Pct(15.0)), ("Poison Damage", Pct(15.0)),
        ]),
        Member("Second Eye Of The Guardian Star", 1, None, &[
            ("Offensive Ability", F(16.0)), ("Defensive Ability", F(16.0)),
        ]),
        Member("Third Eye Of The Guardian Star", 2, None, &[
            ("Chaos Damage", Pct(20.0)), ("Poison Damage", Pct(15.0)),
        ]),
        Member("Fourth Eye Of The Guardian Star", 3, None, &[
            ("Poison Damage", Pct(30.0)), ("Vitality Resistance", Pct(8.0)),
        ]),
        Member("Guardian's Gaze", 4, None, &[
            ("Seconds Skill Recharge", Pct(50.0)), ("Chance to pass through Enemies", Pct(100.0)),
            ("Meter Radius", Pct(30.0)), ("Weapon Damage", Pct(15.0)), ("Acid Damage", F(83.0)),
            ("Chaos Damage", F(193.0)), ("of Attack Damage Converted To Health", Pct(10.0)),
            ("Poison Damage", F(232.0)),
        ]),
    ]),
    Entry("Akerons Scorpion", 1, &[(E, 1)], &[(E, 5)], &[
        Member("First Akerons Scorpion Star", 0, None, &[("Offensive Ability", F(12.0))]),
        Member("Second Akerons Scorpion Star", 1, None, &[
            ("Physique", F(15.0)), ("Poison Damage", Pct(24.0)), ("Acid Damage", Pct(15.0)),
        ]),
        Member("Third Akerons Scorpion Star", 2, None, &[("Offensive Ability", F(18.0))]),
        Member("Fourth Akerons Scorpion Star", 3, Some(1), &[
            ("Acid Damage", Pct(15.0)), ("Poison Damage", Pct(30.0)),
        ]),
        Member("Scorpion Sting", 3, Some(2), &[
            ("Meter Radius", Pct(10.0)), ("Seconds Skill Recharge", Pct(150.0)),
            ("Projectiles", F(6.0)), ("Weapon Damage", Pct(40.0)), ("Poison Damage", F(725.0)),
            ("Reduced target Defensive Ability", F(150.0)),
            ("Chance to pass through Enemies", Pct(100.0)),
        ]),
    ]),
    Entry("Shepherds Crook", 1, &[(A, 1)], &[(A, 5)], &[
        Member("First Shepherds Crook Star", 0, None, &[
            ("Health", F(40.0)), ("pets Health", Pct(8.0)),
        ]),
        Member("Second Shepherds Crook Star", 1, None, &[
            ("Cunning", F(15.0)), ("Health", F(40.0)),
        ]),
        Member("Third Shepherds Crook Star", 2, None, &[
            ("Elemental Resistance", Pct(10.0)), ("pets Elemental Resistance", Pct(15.0)),
        ]),
        Member("Fourth Shepherds Crook Star", 3, None, &[
            ("Health", Pct(3.0)), ("pets Health", Pct(5.0)), ("pets Defensive Ability", Pct(5.0)),
        ]),
        Member("Shepherds call", 4, None, &[
            ("Seconds Skill Recharge", F(6.0)), ("Seconds Duration", F(4.0)),
            ("Offensive Ability", F(85.0)), ("pets to All Damage", Pct(250.0)),
            ("pets Crit Damage", Pct(28.0)), ("pets to All Retaliation Damage", Pct(300.0)),
        ]),
    ]),
    Entry("Nightallon", 1, &[(A, 1)], &[(A, 3), (C, 2)], &[
        Member("First Nighttalon Star", 0, None, &[
            ("Cunning", F(15.0)), ("pets to All Damage", Pct(15.0)),
        ]),
        Member("Second Nighttalon Star", 1, None, &[
            ("Elemental Resistance", Pct(10.0)), ("pets Elemental Resistance", Pct(10.0)),
        ]),
        Member("Third Nighttalon Star", 2, Some(1), &[
            ("Bleeding Damage", Pct(20.0)), ("pets Bleeding Damage", F(12.0)),
            ("pets to All Damage", Pct(25.0)),
        ]),
        Member("Fourth Nighttalon Star", 2, Some(2), &[
            ("Bleeding Damage", Pct(50.0)), ("pets Bleeding Damage", F(24.0)),
            ("pets Bleeding Damage", Pct(60.0)), ("pets Attack Speed", Pct(5.0)),
        ]),
    ]),
    Entry("Anvil", 1, &[(A, 1)], &[(A, 5)], &[
        Member("First Anvil Star", 0, None, &[("Defensive Ability", F(15.0))]),
        Member("Second Anvil Star", 1, None, &[("Physique", F(20.0))]),
        Member("Third Anvil Star", 2, None, &[
            ("Armor", F(30.0)), ("Increases Armor Absorption", Pct(3.0)),
        ]),
        Member("Fourth Anvil Star", 3, None, &[
            ("Internal Trauma Damage", F(40.0)), ("Offensive Ability", F(10.0)),
            ("Defensive Ability", F(15.0)), ("Constitution", Pct(20.0)),
        ]),
        Member("Targos Hammer", 4, None, &[
            ("Seconds Skill Recharge", Pct(10.0)), ("Chance to pass through Enemies", Pct(100.0)),
            ("Meter Radius", Pct(30.0)), ("Weapon Damage", Pct(45.0)),
            ("of Retaliation Damage added to Attack", Pct(16.0)), ("Physical Damage", F(203.0)),
            ("Internal Trauma Damage", Pct(370.0)), ("Chance to Stun", Pct(50.0)),
            ("Chance to Stun", F(1.0)),
        ]),
    ]),
    Entry("Hammer", 1, &[(A, 1)], &[(A, 4)], &[
        Member("First Hammer Star", 0, None, &[("Physical Damage", Pct(15.0)), ("Armor", F(20.0))]),
        Member("Second Hammer Star", 1, None, &[
            ("Internal Trauma Damage", Pct(50.0)), ("Defensive Ability", F(15.0)),
        ]),
        Member("Third Hammer Star", 2, None, &[
            ("Internal Trauma Damage", Pct(30.0)), ("Physical Damage", Pct(24.0)),
            ("Armor increase", Pct(6.0)),
        ]),
    ]),
    Entry("Assassins blade", 1, &[(O, 1)], &[(A, 3), (O, 2)], &[
        Member("First Assasins blade Star", 0, None, &[("Defensive Ability", F(12.0))]),
        Member("Second Assasins blade Star", 1, Some(1), &[
            ("Physical Damage", Pct(15.0)), ("Pierce Damage", Pct(15.0)),
        ]),
        Member("Third Assasins blade Star", 1, Some(2), &[
            ("Pierce Damage", Pct(15.0)), ("Physical Damage", Pct(15.0)),
        ]),
        Member("Fourth Assasins blade Star", 2, Some(2), &[("Offensive Ability", F(18.0))]),
        Member("Assassins Mark", 3, Some(2), &[
            ("Second Duration", F(18.0)), ("Physical Resistance", Pct(-32.0)),
            ("Pierce Resistance", Pct(-32.0)),
        ]),
    ]),
    Entry("Assassin", 2, &[(A, 6), (O, 4)], &[(A, 1), (O, 1)], &[
        Member("First Assassin Star", 0, None, &[("Pierce Damage", Pct(40.0))]),
        Member("Second Assassin Star", 1, None, &[("Cunning", F(20.0)), ("Health", F(60.0))]),
        Member("Third Assassin Star", 2, Some(1), &[
            ("Offensive Ability", F(18.0)), ("Defensive Ability", F(10.0)),
        ]),
        Member("Fourth Assassin Star", 2, None, &[
            ("Cunning", Pct(5.0)), ("Bleeding Resistance", Pct(10.0)),
        ]),
        Member("Fifth Assassin Star", 3, Some(2), &[
            ("Damage to Humans", Pct(8.0)), ("Defensive Ability", F(25.0)),
            ("Poison and Acid Resistance", Pct(10.0)),
        ]),
        Member("Sixth Assassin Star", 3, Some(3), &[
            ("Pierce Damage", F(8.0)), ("Pierce Damage", Pct(50.0)),
        ]),
        Member("Blades of Wrath", 4, Some(3), &[
            ("Seconds Skill Recharge", F(2.0)), ("Projectiles", F(16.0)),
            ("Weapon Damage", Pct(20.0)), ("Pierce Damage", F(268.0)),
            ("Chance to pass through Enemies", Pct(100.0)),
        ]),
    ]),
    Entry("Dryad", 1, &[(O, 1)], &[(O, 3)], &[
        Member("First Dryad Star", 0, None, &[
            ("Physique", F(15.0)), ("Energy", F(200.0)), ("Poison and Acid Resistance", Pct(10.0)),
        ]),
        Member("Second Dryad Star", 1, None, &[
            ("Health", F(80.0)), ("Energy Regenerated per Second", F(1.0)),
        ]),
        Member("Third Dryad Star", 2, None, &[
            ("Movement Speed", Pct(3.0)), ("Slow Resistance", Pct(15.0)),
        ]),
        Member("Fourth Dryad Star", 3, None, &[
            ("Spirit", Pct(5.0)), ("Physical Resistance", Pct(4.0)),
            ("Spirit Requirement for Jewelry", Pct(10.0)),
            ("Spirit Requirement for Weapon", Pct(10.0)),
        ]),
        Member("Dryads Blessing", 4, None, &[
            ("Seconds Skill Recharge", Pct(270.0)), ("Second Duration", F(10.0)),
            ("Health Restored", Pct(10.0)), ("Health Restored", F(598.0)), ("Armor", F(70.0)),
            ("Reduction in Poison Duration", Pct(36.0)),
            ("Reduction in Bleeding Duration", Pct(36.0)),
        ]),
    ]),
    Entry("Eel", 1, &[(P, 1)], &[(P, 5)], &[
        Member("First Eel Star", 0, None, &[
            ("Defensive Ability", F(12.0)), ("Chance to Avoid Melee Attacks", Pct(2.0)),
        ]),
        Member("Second Eel Star", 1, None, &[
            ("Chance to Avoid Projectiles", Pct(2.0)), ("Defensive Ability", F(15.0)),
        ]),
        Member("Third Eel Star", 2, None, &[
            ("Defensive Ability", F(20.0)), ("Movement Speed", Pct(6.0)),
            ("Pierce Resistance", Pct(10.0)),
        ]),
    ]),
    Entry("Panther", 1, &[(O, 1)], &[(P, 3), (O, 2)], &[
        Member("First Panther Star", 0, None, &[
            ("Offensive Ability", F(12.0)), ("pets Offensive Ability", Pct(2.0)),
        ]),
        Member("Second Panther Star", 1, None, &[
            ("Cunning", F(15.0)), ("Spirit", F(15.0)), ("pets to All Damage", Pct(15.0)),
        ]),
        Member("Third Panther Star", 2, None, &[
            ("Offensive Ability", F(16.0)), ("Increases Energy Regeneration", Pct(15.0)),
        ]),
        Member("Fourth Panther Star", 3, None, &[
            ("Offensive Ability", F(25.0)), ("Crit Damage", Pct(6.0)),
            ("pets Crit Damage", Pct(5.0)),
        ]),
    ]),
    Entry("Stag", 1, &[(O, 1)], &[(P, 3), (O, 2)], &[
        Member("First Stag Star", 0, None, &[
            ("Physical Damage", Pct(15.0)), ("Bleeding Damage", Pct(15.0)),
        ]),
        Member("Second Stag Star", 1, None, &[
            ("Physique", F(15.0)), ("Movement Speed", Pct(5.0)), ("Pierce Resistance", Pct(10.0)),
        ]),
        Member("Third Stag Star", 2, None, &[
            ("Health", F(80.0)), ("Defensive Ability", F(15.0)),
            ("to All Retaliation Damage", Pct(30.0)),
        ]),
        Member("Fourth Stag Star", 3, None, &[
            ("Physical Damage", Pct(24.0)), ("Bleeding Damage", Pct(24.0)),
            ("Physical Resistance", Pct(3.0)),
        ]),
    ]),
    Entry("Rattosh Staff", 2, &[(P, 6), (C, 3), (O, 3)], &[(P, 3), (C, 2)], &[
        Member("First Rattosh Staff Star", 0, None, &[
            ("Defensive Ability", F(20.0)), ("pets Defensive Ability", Pct(3.0)),
        ]),
        Member("Second Rattosh Staff Star", 1, None, &[
            ("Aether Resistance", Pct(15.0)), ("pets Aether Resistance", Pct(15.0)),
        ]),
        Member("Third Rattosh Staff Star", 2, Some(1), &[
            ("Aether Damage", Pct(50.0)), ("pets to All Damage", Pct(50.0)),
        ]),
        Member("Fourth Rattosh Staff Star", 3, Some(1), &[
            ("Offensive Ability", Pct(3.0)), ("pets Crit Damage", Pct(6.0)),
            ("pets Offensive Ability", Pct(3.0)),
        ]),
        Member("Fifth Rattosh Staff Star", 2, Some(2), &[
            ("Health", F(150.0)), ("pets to All Damage", Pct(30.0)),
        ]),
        Member("Sixth Rattosh Staff Star", 3, Some(2), &[
            ("Health", Pct(5.0)), ("Vitality Resistance", Pct(10.0)),
            ("pets Vitality Resistance", Pct(10.0)),
        ]),
    ]),
    Entry("Widow", 2, &[(E, 6), (P, 4)], &[(P, 3)], &[
        Member("First Widow Star", 0, None, &[("Aether Damage", Pct(40.0))]),
        Member("Second Widow Star", 1, None, &[
            ("Energy", Pct(5.0)), ("Offensive Ability", F(18.0)),
        ]),
        Member("Third Widow Star", 2, None, &[
            ("Physique", F(15.0)), ("Spirit", F(15.0)), ("Aether Damage", Pct(30.0)),
        ]),
        Member("Fourth Widow Star", 3, None, &[
            ("Vitality Resistance", Pct(8.0)), ("Aether Resistance", Pct(18.0)),
        ]),
        Member("Fifth Widow Star", 4, None, &[
            ("Lightining Damage", Pct(50.0)), ("Aether Damage", Pct(50.0)),
            ("Offensive Ability", Pct(2.0)),
        ]),
        Member("Arcane Bomb", 5, None, &[
            ("Seconds Skill Recharge", F(2.0)), ("Meter Radius", F(1.0)), ("Summon Limit", F(6.0)),
        ]),
    ]),
    Entry("Kraken", 2, &[(P, 5), (E, 5)], &[(P, 3), (C, 2)], &[
        Member("First Kraken Star", 0, None, &[("to All Damage", Pct(50.0))]),
        Member("Second Kraken Star", 1, Some(1), &[
            ("Health", F(180.0)), ("Attack Speed", Pct(10.0)), ("Casting Speed", Pct(4.0)),
        ]),
        Member("Third Kraken Star", 1, Some(2), &[
            ("Health", F(180.0)), ("Attack Speed", Pct(10.0)), ("Casting Speed", Pct(4.0)),
        ]),
        Member("Fourth Kraken Star", 1, Some(3), &[
            ("to All Damage", Pct(70.0)), ("Movement Speed", Pct(5.0)),
        ]),
        Member("Fifth Kraken Star", 1, Some(4), &[
            ("Crit Damage", Pct(15.0)), ("Physical Resistance", Pct(4.0)),
        ]),
    ]),
    Entry("Wraith", 1, &[(P, 1)], &[(P, 3), (A, 3)], &[
        Member("First Wraith Star", 0, None, &[
            ("Lightining Damage", Pct(15.0)), ("Aether Damage", Pct(15.0)),
        ]),
        Member("Second Wraith Star", 1, Some(1), &[
            ("Lightining Damage", Pct(24.0)), ("Aether Damage", Pct(24.0)),
            ("Damage to Undead", Pct(6.0)),
        ]),
        Member("Third Wraith Star", 2, Some(2), &[
            ("Spirit", F(15.0)), ("Aether Resistance", Pct(8.0)),
            ("to All Retaliation Damage", Pct(20.0)),
        ]),
        Member("Fourth Wraith Star", 3, Some(3), &[
            ("Offensive Ability", F(24.0)), ("Energy Absorbed From Enemy Spells", Pct(15.0)),
            ("Lightining Retaliation", F(35.5)),
        ]),
    ]),
    Entry("Tempest", 2, &[(P, 5), (A, 5)], &[(E, 1), (P, 1)], &[
        Member("First Tempest Star", 0, None, &[("Lightining Damage", Pct(40.0))]),
        Member("Second Tempest Star", 1, None, &[
            ("Lightining Damage", F(10.5)), ("Physique", F(20.0)),
        ]),
        Member("Third Tempest Star", 2, None, &[
            ("Lightining Damage", Pct(50.0)), ("Electrocute Damage", Pct(50.0)),
        ]),
        Member("Fourth Tempest Star", 3, None, &[
            ("Offensive Ability", F(20.0)), ("Defensive Ability", F(20.0)),
            ("Lightining Resistance", Pct(25.0)),
        ]),
        Member("Fifth Tempest Star", 4, Some(1), &[
            ("Chance of 250 Lightining Damage", Pct(30.0)), ("Movement Speed", Pct(3.0)),
            ("Reduced Stun Duration", Pct(15.0)),
        ]),
        Member("Sixth Tempest Star", 4, Some(2), &[
            ("Electrocute Damage", Pct(50.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Reckless Tempest", 5, Some(2), &[
            ("Seconds Skill Recharge", F(10.0)), ("Seconds Duration", F(6.0)),
            ("Meter Target Area", F(8.0)), ("Lightining Damage", F(166.0)),
            ("Electrocute Damage", F(408.0)), ("Chance to Stun", Pct(20.0)),
            ("Chance to Stun", Pct(70.0)),
        ]),
    ]),
    Entry("Vulture", 1, &[(C, 1)], &[(C, 5)], &[
        Member("First Vulture Star", 0, None, &[("Cunning", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Vulture Star", 1, None, &[
            ("Bleeding Resistance", Pct(15.0)), ("Offensive Ability", F(15.0)),
            ("Life Leech Resistance", Pct(30.0)),
        ]),
        Member("Third Vulture Star", 2, Some(1), &[
            ("Cunning", Pct(5.0)), ("Spirit", Pct(5.0)), ("Offensive Ability", F(10.0)),
        ]),
        Member("Fourth Vulture Star", 2, Some(2), &[
            ("Vitality Resistance", Pct(15.0)), ("Chaos Resistance", Pct(8.0)),
            ("Offensive Ability", F(15.0)),
        ]),
        Member("Fifth Vulture Star", 2, Some(3), &[
            ("Health", F(80.0)), ("Energy", F(200.0)), ("Offensive Ability", F(15.0)),
        ]),
    ]),
    Entry("Fiend", 1, &[(C, 1)], &[(E, 3), (C, 2)], &[
        Member("First Fiend Star", 0, None, &[
            ("Fire Damage", Pct(15.0)), ("Chaos Damage", Pct(15.0)),
        ]),
        Member("Second Fiend Star", 1, None, &[
            ("Spirit", F(15.0)), ("pets Fire Damage", Pct(25.0)),
        ]),
        Member("Third Fiend Star", 2, None, &[("Chaos Resistance", Pct(8.0))]),
        Member("Fourth Fiend Star", 3, None, &[
            ("Fire Damage", Pct(24.0)), ("Chaos Damage", Pct(24.0)),
            ("pets Fire Damage", Pct(40.0)),
        ]),
        Member("Flame Torrent", 4, None, &[
            ("Seconds Skill Recharge", Pct(50.0)), ("Meter Radius", Pct(50.0)),
            ("Chance to pass through Enemies", Pct(100.0)), ("Weapon Damage", Pct(20.0)),
            ("Fire Damage", F(178.0)), ("Chaos Damage", F(126.0)), ("Burn Damage", F(420.0)),
        ]),
    ]),
    Entry("Ghoul", 1, &[(C, 1)], &[(C, 3)], &[
        Member("First Ghoul Star", 0, None, &[
            ("Physique", F(15.0)), ("Defensive Ability", F(8.0)),
        ]),
        Member("Second Ghoul Star", 1, None, &[
            ("Health", Pct(3.0)), ("Health Regenerated Per Second", F(6.0)),
        ]),
        Member("Third Ghoul Star", 2, Some(1), &[
            ("Physique", F(15.0)), ("Spirit", F(15.0)), ("Defensive Ability", F(15.0)),
        ]),
        Member("Fourth Ghoul Star", 2, Some(2), &[
            ("of Attack Damage Converted To Health", Pct(4.0)),
            ("Increases Health Regeneration", Pct(15.0)),
        ]),
        Member("Ghoulish Hunger", 3, Some(2), &[
            ("Seconds Skill Recharge", F(30.0)), ("Seconds Duration", F(5.0)),
            ("of Attack Damage Converted To Health", Pct(80.0)), ("Attack Speed", Pct(22.0)),
            ("Physical Resistance", Pct(18.0)),
        ]),
    ]),
    Entry("Spider", 1, &[(E, 1)], &[(E, 6)], &[
        Member("First Spider Star", 0, None, &[("Cunning", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Spider Star", 1, Some(1), &[
            ("Cunning", Pct(3.0)), ("Defensive Ability", F(20.0)),
        ]),
        Member("Third Spider Star", 1, Some(2), &[
            ("Defensive Ability", F(20.0)), ("Attack Speed", Pct(5.0)),
        ]),
        Member("Fourth Spider Star", 1, Some(3), &[
            ("Offensive Ability", F(20.0)), ("Casting Speed", Pct(5.0)),
        ]),
        Member("Fifth Spider Star", 1, Some(4), &[
            ("Spirit", Pct(3.0)), ("Offensive Ability", F(20.0)),
        ]),
    ]),
    Entry("Raven", 1, &[(E, 1)], &[(E, 5)], &[
        Member("First Raven Star", 0, None, &[
            ("Spirit", F(15.0)), ("pets to All Damage", Pct(15.0)),
        ]),
        Member("Second Raven Star", 1, None, &[
            ("Offensive Ability", F(10.0)), ("Energy Regenerated per Second", F(1.0)),
        ]),
        Member("Third Raven Star", 2, Some(1), &[
            ("Offensive Ability", Pct(3.0)), ("pets Offensive Ability", Pct(5.0)),
        ]),
        Member("Fourth Raven Star", 2, Some(2), &[
            ("Offensive Ability", F(15.0)), ("pets Lightining Damage", F(6.0)),
            ("pets Lightining Damage", Pct(60.0)),
        ]),
    ]),
    Entry("Quill", 1, &[(E, 1)], &[(E, 3), (A, 3)], &[
        Member("First Quill Star", 0, None, &[("Elemental Damage", Pct(15.0))]),
        Member("Second Quill Star", 1, None, &[("Aether Resistance", Pct(8.0))]),
        Member("Third Quill Star", 2, None, &[("Health", F(60.0)), ("Energy", F(150.0))]),
        Member("Fourth Quill Star", 3, None, &[
            ("Elemental Damage", Pct(24.0)), ("Energy", Pct(5.0)), ("Defensive Ability", Pct(2.0)),
        ]),
    ]),
    Entry("Scholars Light", 1, &[(E, 1)], &[(E, 4)], &[
        Member("First Scholars Light Star", 0, None, &[("Elemental Damage", Pct(15.0))]),
        Member("Second Scholars Light Star", 1, None, &[
            ("Physique", F(15.0)), ("Defensive Ability", F(15.0)),
            ("Elemental Resistance", Pct(8.0)),
        ]),
        Member("Third Scholars Light Star", 2, None, &[
            ("Elemental Damage", Pct(24.0)), ("Energy Regenerated per Second", F(3.0)),
            ("Aether Resistance", Pct(8.0)),
        ]),
    ]),
    Entry("Hawk", 1, &[(E, 1)], &[(E, 3)], &[
        Member("First Hawk Star", 0, None, &[("Offensive Ability", F(15.0))]),
        Member("Second Hawk Star", 1, None, &[
            ("Crit Damage", Pct(8.0)), ("pets Crit Damage", Pct(4.0)),
        ]),
        Member("Third Hawk Star", 2, None, &[
            ("Offensive Ability", Pct(3.0)), ("Cunning Requirement for Ranged Weapons", Pct(10.0)),
            ("pets Offensive Ability", Pct(2.0)),
        ]),
    ]),
    Entry("Owl", 1, &[(A, 1)], &[(A, 5)], &[
        Member("First Owl Star", 0, None, &[("Cunning", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Owl Star", 1, None, &[("Elemental Resistance", Pct(8.0))]),
        Member("Third Owl Star", 2, Some(2), &[
            ("Internal Trauma Damage", Pct(50.0)), ("Bleeding Damage", Pct(50.0)),
            ("Burn Damage", Pct(50.0)), ("Electrocute Damage", Pct(50.0)),
            ("Poison Damage", Pct(50.0)), ("Vitality Decay", Pct(50.0)),
        ]),
        Member("Fourth Owl Star", 2, Some(3), &[
            ("to All Damage", Pct(30.0)), ("Defensive Ability", F(15.0)),
            ("Reflected Damage Reduction", Pct(15.0)),
        ]),
    ]),
    Entry("Harpy", 1, &[(A, 1)], &[(A, 5)], &[
        Member("First Harpy Star", 0, None, &[
            ("Pierce Damage", Pct(15.0)), ("Cold Damage", Pct(15.0)),
        ]),
        Member("Second Harpy Star", 1, None, &[
            ("Cunning", F(15.0)), ("Energy Regenerated per Second", Pct(150.0)),
        ]),
        Member("Third Harpy Star", 2, None, &[
            ("Offensive Ability", F(24.0)), ("Bleeding Resistance", Pct(10.0)),
        ]),
        Member("Fourth Harpy Star", 2, None, &[
            ("Pierce Damage", Pct(24.0)), ("Pierce Damage", F(6.0)), ("Crit Damage", Pct(3.0)),
            ("Cold Damage", Pct(24.0)),
        ]),
    ]),
    Entry("Targo the Builder", 2, &[(P, 6), (O, 4)], &[(O, 1)], &[
        Member("First Targo the Builder Star", 0, None, &[
            ("Defensive Ability", F(20.0)), ("to All Retaliation Damage", Pct(30.0)),
        ]),
        Member("Second Targo the Builder Star", 1, None, &[
            ("Health", Pct(5.0)), ("Aether Resistance", Pct(8.0)),
        ]),
        Member("Third Targo the Builder Star", 2, Some(1), &[
            ("Armor", Pct(5.0)), ("Physical Damage Retaliation", F(100.0)),
        ]),
        Member("Fourth Targo the Builder Star", 2, None, &[
            ("Health", Pct(5.0)), ("Chaos Resistance", Pct(8.0)),
        ]),
        Member("Fifth Targo the Builder Star", 3, Some(2), &[
            ("Health", F(300.0)), ("Defensive Ability", F(35.0)),
            ("to All Retaliation Damage", Pct(30.0)),
        ]),
        Member("Sixth Targo the Builder Star", 3, Some(3), &[
            ("Armor", Pct(5.0)), ("Shield Damage Blocked", Pct(20.0)),
        ]),
        Member("Shield Wall", 4, Some(3), &[
            ("Seconds Skill Recharge", F(8.0)), ("Second Duration", F(5.0)), ("Armor", Pct(35.0)),
            ("Shield Damage Blocked", Pct(150.0)), ("Physical Damage Retaliation", F(535.0)),
        ]),
    ]),
    Entry("Blades of Nadan", 2, &[(A, 10)], &[(A, 3), (O, 2)], &[
        Member("First Blades of Nadaan Star", 0, None, &[
            ("Chance to Avoid Melee Attacks", Pct(2.0)), ("Chance to Avoid Projectiles", Pct(2.0)),
        ]),
        Member("Second Blades of Nadaan Star", 1, None, &[("Pierce Damage", Pct(40.0))]),
        Member("Third Blades of Nadaan Star", 2, Some(1), &[
            ("Defensive Ability", F(8.0)), ("Attack Speed", Pct(4.0)),
        ]),
        Member("Fourth Blades of Nadaan Star", 2, Some(2), &[("Pierce Damage", Pct(50.0))]),
        Member("Fifth Blades of Nadaan Star", 2, Some(3), &[
            ("Defensive Ability", F(8.0)), ("Attack Speed", Pct(4.0)),
        ]),
        Member("Sixth Blades of Nadaan Star", 2, Some(4), &[
            ("Pierce Damage", F(8.0)), ("Increases Armor Piercing", Pct(100.0)),
        ]),
    ]),
    Entry("Schales of Ulcana", 2, &[(O, 8)], &[(O, 2)], &[
        Member("First Schales of Ulcana Star", 0, None, &[
            ("Health", F(150.0)), ("Energy", F(300.0)),
        ]),
        Member("Second Schales of Ulcana Star", 1, None, &[
            ("Health", Pct(4.0)), ("Movement Speed", Pct(4.0)),
        ]),
        Member("Third Schales of Ulcana Star", 2, Some(2), &[
            ("Energy Regenerated per Second", F(3.0)),
            ("Increases Energy Regeneration", Pct(33.0)),
        ]),
        Member("Fourth Schales of Ulcana Star", 3, Some(2), &[
            ("of Attack Damage Converted To Health", Pct(3.0)),
            ("Health Regenerated Per Second", F(30.0)),
            ("Increases Health Regeneration", Pct(33.0)),
        ]),
        Member("Fifth Schales of Ulcana Star", 2, Some(1), &[
            ("Physique", F(20.0)), ("Defensive Ability", F(30.0)),
        ]),
        Member("Tip the Scales", 3, Some(1), &[
            ("Seconds Skill Recharge", F(1.0)), ("Weapon Damage", Pct(33.0)),
            ("Vitality Damage", F(310.0)), ("of Attack Damage Converted To Health", Pct(132.0)),
            ("Energy Leech", F(400.0)), ("Reduced target Resistances", F(20.0)),
        ]),
    ]),
    Entry("Solemn Watcher", 2, &[(P, 10)], &[(P, 3), (O, 2)], &[
        Member("First Solemn Watcher Star", 0, None, &[("Physique", F(20.0))]),
        Member("Second Solemn Watcher Star", 1, None, &[
            ("Cold Resistance", Pct(25.0)), ("Armor", F(40.0)),
        ]),
        Member("Third Solemn Watcher Star", 2, None, &[
            ("Pierce Resistance", Pct(18.0)), ("Armor", F(40.0)),
        ]),
        Member("Fourth Solemn Watcher Star", 3, None, &[
            ("Defensive Ability", F(30.0)), ("Physique", Pct(3.0)),
        ]),
        Member("Fifth Solemn Watcher Star", 4, None, &[
            ("Defensive Ability", Pct(4.0)), ("Reflected Damage Reduction", Pct(20.0)),
        ]),
    ]),
    Entry("Lotus", 1, &[(O, 1)], &[(E, 3), (O, 2)], &[
        Member("First Lotus Star", 0, None, &[("Health", F(30.0)), ("Energy", F(100.0))]),
        Member("Second Lotus Star", 1, Some(1), &[
            ("Physical Resistance", Pct(3.0)), ("Healing Effects Increased", Pct(10.0)),
        ]),
        Member("Third Lotus Star", 1, Some(2), &[
            ("Health", F(80.0)), ("Energy", Pct(4.0)), ("Vitality Resistance", Pct(8.0)),
        ]),
        Member("Fourth Lotus Star", 1, Some(3), &[
            ("Energy Regenerated per Second", F(1.0)),
            ("Increases Energy Regeneration", Pct(15.0)),
        ]),
    ]),
    Entry("Dire Bear", 2, &[(P, 5), (A, 5)], &[(P, 1), (A, 1)], &[
        Member("First Dire Bear Star", 0, None, &[("Physical Damage", Pct(40.0))]),
        Member("Second Dire Bear Star", 1, None, &[
            ("Physique", F(20.0)), ("Cunning", F(20.0)), ("Defensive Ability", F(15.0)),
        ]),
        Member("Third Dire Bear Star", 2, None, &[
            ("Physical Damage", Pct(50.0)), ("Armor", F(60.0)),
        ]),
        Member("Fourth Dire Bear Star", 3, None, &[
            ("Health", Pct(5.0)), ("Reduced Stun Duration", Pct(15.0)),
            ("Reduced Freeze Duration", Pct(15.0)),
        ]),
        Member("Fifth Dire Bear Star", 4, Some(1), &[
            ("Defensive Ability", Pct(2.0)), ("Armor", F(80.0)),
        ]),
        Member("maul", 4, Some(2), &[
            ("Seconds Skill Recharge", F(1.0)), ("Seconds Duration", F(3.0)),
            ("Meter Radius", F(4.0)), ("Physical Damage", F(305.0)),
            ("Increases Armor", Pct(-35.0)), ("of Attack Damage Converted To Health", Pct(40.0)),
        ]),
    ]),
    Entry("Amatok the Spirit of Winter", 2, &[(P, 6), (E, 4)], &[(P, 1), (E, 1)], &[
        Member("First Amatok the Spirit of Winter Star", 0, None, &[("Cold Damage", Pct(40.0))]),
        Member("Second Amatok the Spirit of Winter Star", 1, None, &[
            ("Health", Pct(4.0)), ("Defensive Ability", F(15.0)),
        ]),
        Member("Third Amatok the Spirit of Winter Star", 2, Some(2), &[
            ("Defensive Ability", F(30.0)), ("Cold Resistance", Pct(25.0)),
        ]),
        Member("Fourth Amatok the Spirit of Winter Star", 2, Some(1), &[
            ("Cold Damage", Pct(50.0)), ("Health", F(100.0)),
        ]),
        Member("Fifth Amatok the Spirit of Winter Star", 3, Some(1), &[("Cold Damage", Pct(50.0))]),
        Member("Sixth Amatok the Spirit of Winter Star", 2, Some(3), &[
            ("Offensive Ability", F(25.0)),
        ]),
        Member("Blizzard", 3, Some(3), &[
            ("Seconds Skill Recharge", Pct(320.0)), ("Meter Radius", F(2.0)),
            ("Meter Target Area", Pct(650.0)), ("Weapon Damage", Pct(16.0)),
            ("Cold Damage", F(353.5)), ("Chance to Freeze Target", Pct(50.0)),
            ("Slower target Movement", Pct(70.0)),
        ]),
    ]),
    Entry("Spear of The Heavens", 3, &[(P, 20), (C, 7)], &[], &[
        Member("First Spear of The Heavens Star", 0, None, &[
            ("Lightining Damage", Pct(80.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Second Spear of The Heavens Star", 1, None, &[
            ("Aether Damage", Pct(80.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Third Spear of The Heavens Star", 2, None, &[
            ("Offensive Ability", Pct(5.0)), ("Aether Resistance", Pct(15.0)),
        ]),
        Member("Fourth Spear of The Heavens Star", 3, None, &[
            ("Crit Damage", Pct(5.0)), ("Lightining Resistance", Pct(20.0)),
            ("Aether Damage", F(10.0)),
        ]),
        Member("Fifth Spear of The Heavens Star", 4, None, &[
            ("Lightining Damage", Pct(100.0)), ("Aether Damage", Pct(100.0)),
            ("Maximum Lightining Resistance", Pct(3.0)),
        ]),
        Member("Spear of The Heavens", 5, None, &[
            ("Seconds Skill Recharge", F(1.0)), ("Meter Target Area", Pct(50.0)),
            ("Meter Radius", Pct(240.0)), ("Weapon Damage", Pct(60.0)),
            ("Lightining Damage", F(227.5)), ("Aether Damage", F(294.0)),
            ("Electrocute Damage", F(236.0)), ("Chance to Stun", F(1.0)),
        ]),
    ]),
    Entry("Messenger of War", 2, &[(P, 7), (A, 3)], &[(P, 3), (C, 2)], &[
        Member("First Messenger of War Star", 0, None, &[
            ("Fire Retaliation", F(90.0)), ("to All Retaliation Damage", Pct(30.0)),
        ]),
        Member("Second Messenger of War Star", 1, None, &[
            ("Physique", F(20.0)), ("Offensive Ability", F(20.0)), ("Movement Speed", Pct(5.0)),
        ]),
        Member("Third Messenger of War Star", 2, Some(1), &[
            ("Offensive Ability", F(25.0)), ("to All Retaliation Damage", Pct(50.0)),
        ]),
        Member("Fourth Messenger of War Star", 3, Some(1), &[
            ("Armor", Pct(12.0)), ("Fire Retaliation", F(120.0)),
        ]),
        Member("Fifth Messenger of War Star", 2, Some(2), &[
            ("Elemental Resistance", Pct(15.0)), ("Fire Retaliation", F(120.0)),
        ]),
        Member("Messenger of War", 3, Some(2), &[
            ("Seconds Skill Recharge", F(15.0)), ("Second Duration", F(8.0)),
            ("Movement Speed", Pct(30.0)), ("Slow Resistance", Pct(70.0)),
            ("Fire Retaliation", F(780.0)), ("to All Retaliation Damage", Pct(150.0)),
        ]),
    ]),
    Entry("Chariot of The Dead", 2, &[(A, 5), (E, 5)], &[(E, 3), (C, 2)], &[
        Member("First Chariot of The Dead Star", 0, None, &[
            ("Physique", F(20.0)), ("Cunning", F(20.0)),
        ]),
        Member("Second Chariot of The Dead Star", 1, None, &[
            ("Offensive Ability", F(15.0)), ("Slow Resistance", Pct(10.0)),
        ]),
        Member("Third Chariot of The Dead Star", 2, Some(1), &[
            ("Vitality Resistance", Pct(16.0)), ("Reduced Stun Duration", Pct(15.0)),
        ]),
        Member("Fourth Chariot of The Dead Star", 2, None, &[
            ("Cunning", F(25.0)), ("Health", F(100.0)),
        ]),
        Member("Fifth Chariot of The Dead Star", 3, Some(2), &[
            ("Offensive Ability", F(25.0)), ("Slow Resistance", Pct(15.0)),
        ]),
        Member("Sixth Chariot of The Dead Star", 4, Some(2), &[
            ("Offensive Ability", F(15.0)), ("Offensive Ability", Pct(4.0)),
        ]),
        Member("Wayward Soul", 5, Some(2), &[
            ("Seconds Skill Recharge", F(18.0)), ("Seconds Duration", F(7.0)),
            ("Health Restored", Pct(12.0)), ("Health Restored", F(1550.0)),
            ("Defensive Ability", F(120.0)), ("Armor", F(150.0)),
        ]),
    ]),
    Entry("Mantis", 1, &[(C, 1)], &[(A, 3), (C, 2)], &[
        Member("First Mantis Star", 0, None, &[("Pierce Damage", Pct(15.0)), ("Armor", F(20.0))]),
        Member("Second Mantis Star", 1, None, &[
            ("Elemental Resistance", Pct(10.0)), ("Defensive Ability", F(10.0)),
        ]),
        Member("Third Mantis Star", 2, None, &[
            ("Health", F(80.0)), ("Energy Regenerated per Second", Pct(150.0)),
        ]),
        Member("Fourth Mantis Star", 3, None, &[
            ("Pierce Damage", F(5.0)), ("Pierce Damage", Pct(24.0)),
            ("Physical Resistance", Pct(3.0)),
        ]),
    ]),
    Entry("Solaels Witchblade", 2, &[(E, 6), (C, 4)], &[(E, 1), (C, 1)], &[
        Member("First Solaels Witchblade Star", 0, None, &[("Chaos Damage", Pct(40.0))]),
        Member("Second Solaels Witchblade Star", 1, None, &[
            ("Physique", F(15.0)), ("Spirit", F(15.0)), ("Offensive Ability", F(10.0)),
        ]),
        Member("Third Solaels Witchblade Star", 2, None, &[
            ("Fire Damage", Pct(30.0)), ("Chaos Damage", Pct(30.0)),
            ("Defensive Ability", F(10.0)),
        ]),
        Member("Fourth Solaels Witchblade Star", 3, None, &[
            ("Fire Damage", Pct(50.0)), ("Chaos Damage", Pct(50.0)),
            ("Defensive Ability", F(15.0)),
        ]),
        Member("Eldritch Fire", 4, None, &[
            ("Seconds Skill Recharge", F(1.0)), ("Seconds Duration", F(4.0)),
            ("Fire Damage", F(120.0)), ("Chaos Damage", F(120.0)), ("Movement Speed", Pct(-36.0)),
            ("Fire Resistance", Pct(-23.0)), ("Chaos Resistance", Pct(-35.0)),
        ]),
    ]),
    Entry("Berserker", 2, &[(A, 5), (E, 5)], &[(E, 3), (C, 2)], &[
        Member("First Berserker Star", 0, None, &[
            ("Health", F(200.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Second Berserker Star", 1, Some(3), &[
            ("Physical Resistance", Pct(3.0)), ("Pierce Resistance", Pct(15.0)),
        ]),
        Member("Third Berserker Star", 1, Some(2), &[
            ("Physical Damage", Pct(50.0)), ("Bleeding Damage", Pct(50.0)),
            ("Reduced Stun Duration", Pct(15.0)),
        ]),
        Member("Fourth Berserker Star", 2, Some(2), &[
            ("Bleeding Damage", F(60.0)), ("Bleeding Damage", Pct(50.0)),
        ]),
        Member("Fifth Berserker Star", 1, Some(1), &[
            ("Physical Damage", Pct(50.0)), ("Bleeding Damage", Pct(50.0)),
            ("Reduced Freeze Duration", Pct(15.0)),
        ]),
        Member("Sixth Berserker Star", 2, Some(1), &[
            ("Crit Damage", Pct(5.0)), ("Offensive Ability", F(50.0)),
        ]),
    ]),
    Entry("Bysmiels Bonds", 2, &[(E, 6), (C, 4)], &[(E, 3)], &[
        Member("First Bysmiels Bonds Star", 0, None, &[
            ("Offensive Ability", F(15.0)), ("pets to All Damage", Pct(30.0)),
        ]),
        Member("Second Bysmiels Bonds Star", 1, None, &[
            ("Physique", F(15.0)), ("Casting Speed", Pct(5.0)), ("pets Total Speed", Pct(8.0)),
        ]),
        Member("Third Bysmiels Bonds Star", 2, None, &[
            ("Vitality Resistance", Pct(15.0)), ("pets Vitality Resistance", Pct(20.0)),
        ]),
        Member("Fourth Bysmiels Bonds Star", 3, None, &[
            ("to All Damage", Pct(30.0)), ("pets to All Damage", Pct(40.0)),
            ("pets Health", Pct(10.0)),
        ]),
        Member("Bysmiels Command", 4, None, &[
            ("Seconds Skill Recharge", F(30.0)), ("Summon Limit", F(1.0)),
        ]),
    ]),
    Entry("Fox", 1, &[(E, 1)], &[(E, 5)], &[
        Member("First Fox Star", 0, None, &[("Cunning", F(15.0)), ("Spirit", F(15.0))]),
        Member("Second Fox Star", 1, None, &[
            ("Bleeding Damage", F(24.0)), ("Bleeding Damage", Pct(24.0)),
        ]),
        Member("Third Fox Star", 2, None, &[
            ("Cunning", F(25.0)), ("Bleeding Resistance", Pct(8.0)),
        ]),
        Member("Fourth Fox Star", 3, None, &[
            ("Bleeding Damage", F(36.0)), ("Bleeding Damage", Pct(50.0)),
            ("of Attack Damage Converted To Health", Pct(4.0)),
        ]),
    ]),
    Entry("Manticore", 2, &[(E, 6), (C, 4)], &[(A, 1), (E, 1)], &[
        Member("First Manticore Star", 0, None, &[("Offensive Ability", F(15.0))]),
        Member("Second Manticore Star", 1, None, &[
            ("Acid Damage", Pct(50.0)), ("Poison Damage", Pct(50.0)),
            ("pets Poison Damage", Pct(60.0)),
        ]),
        Member("Third Manticore Star", 2, None, &[("Health", Pct(5.0)), ("pets Health", Pct(5.0))]),
        Member("Fourth Manticore Star", 3, Some(1), &[
            ("Physical Resistance", Pct(4.0)), ("Offensive Ability", F(20.0)),
            ("Poison and Acid Resistance", Pct(10.0)), ("pets Offensive Ability", Pct(4.0)),
        ]),
        Member("Fifth Manticore Star", 3, Some(2), &[
            ("Poison Damage", F(40.0)), ("Poison Damage", Pct(40.0)), ("Acid Damage", Pct(40.0)),
        ]),
        Member("Acid Spray", 4, Some(2), &[
            ("Seconds Skill Recharge", F(1.0)), ("Meter Radius", F(4.0)),
            ("Acid Damage", F(217.0)), ("Poison Damage", F(200.0)),
            ("Reduced target Resistances", F(28.0)),
        ]),
    ]),
    Entry("Harvestmans Scythe", 2, &[(P, 5), (A, 3), (O, 3)], &[(P, 3), (A, 3)], &[
        Member("First Harvestmans Scythe Star", 0, None, &[
            ("Energy Regenerated per Second", F(2.0)), ("Movement Speed", Pct(3.0)),
        ]),
        Member("Second Harvestmans Scythe Star", 1, None, &[
            ("Health", F(200.0)), ("Energy", F(200.0)), ("Movement Speed", Pct(3.0)),
        ]),
        Member("Third Harvestmans Scythe Star", 2, None, &[
            ("Physique", Pct(4.0)), ("Healing Effects Increased", Pct(6.0)),
        ]),
        Member("Fourth Harvestmans Scythe Star", 3, None, &[
            ("Cunning", Pct(4.0)), ("Spirit", Pct(4.0)),
        ]),
        Member("Fifth Harvestmans Scythe Star", 4, None, &[
            ("Defensive Ability", Pct(3.0)), ("Increases Health Regeneration", Pct(30.0)),
            ("Increases Energy Regeneration", Pct(30.0)),
        ]),
        Member("Sixth Harvestmans Scythe Star", 4, None, &[
            ("Health", Pct(5.0)), ("Energy", Pct(5.0)), ("Health Regenerated Per Second", F(60.0)),
            ("Energy Regenerated per Second", F(3.0)),
        ]),
    ]),
    Entry("Empty Throne", 1, &[(A, 1)], &[(A, 5)], &[
        Member("First Empty Throne Star", 0, None, &[
            ("Defensive Ability", F(12.0)), ("Slow Resistance", Pct(10.0)),
        ]),
        Member("Second Empty Throne Star", 1, None, &[
            ("Defensive Ability", F(20.0)), ("Pierce Resistance", Pct(8.0)),
            ("pets Pierce Resistance", Pct(8.0)),
        ]),
        Member("Third Empty Throne Star", 2, Some(1), &[
            ("Aether Resistance", Pct(10.0)), ("Reduced Freeze Duration", Pct(22.0)),
            ("pets Aether Resistance", Pct(10.0)), ("pets Reduced Freeze Duration", Pct(22.0)),
        ]),
        Member("Fourth Empty Throne Star", 2, Some(2), &[
            ("Chaos Resistance", Pct(10.0)), ("pets Chaos Resistance", Pct(10.0)),
            ("Reduced Stun Duration", Pct(22.0)),
        ]),
    ]),
    Entry("Rhowans Crown", 2, &[(E, 4)], &[(E, 1), (A, 1)], &[
        Member("First Rhowans Crown Star", 0, None, &[
            ("Elemental Damage", Pct(40.0)), ("Burn Damage", Pct(60.0)),
            ("Electrocute Damage", Pct(60.0)), ("Chaos Resistance", Pct(8.0)),
        ]),
        Member("Second Rhowans Crown Star", 1, None, &[
            ("Spirit", F(20.0)), ("Defensive Ability", F(20.0)),
            ("pets Elemental Damage", Pct(40.0)),
        ]),
        Member("Elemental Storm", 2, None, &[
            ("Seconds Skill Recharge", Pct(150.0)), ("Seconds Duration", F(5.0)),
            ("Meter Radius", Pct(350.0)), ("Elemental Damage", F(132.0)),
            ("Burn Damage", F(156.0)), ("Electrocute Damage", F(156.0)),
            ("Reduced target Elemental Resistances", F(32.0)),
        ]),
        Member("Third Rhowans Crown Star", 3, None, &[
            ("Elemental Resistance", Pct(18.0)), ("pets Elemental Resistance", Pct(10.0)),
        ]),
        Member("Fourth Rhowans Crown Star", 4, None, &[
            ("Elemental Damage", F(7.5)), ("Elemental Damage", Pct(30.0)),
        ]),
    ]),
    Entry("Toad", 1, &[(A, 1)], &[(A, 3), (E, 3)], &[
        Member("First Toad Star", 0, None, &[("Vitality Resistance", Pct(8.0))]),
        Member("Second Toad Star", 1, None, &[
            ("Spirit", F(15.0)), ("Offensive Ability", F(10.0)),
            ("pets Offensive Ability", Pct(3.0)),
        ]),
        Member("Third Toad Star", 2, None, &[
            ("of Attack Damage Converted To Health", Pct(3.0)), ("Health", F(60.0)),
            ("pets of Attack Damage Converted To Health", Pct(4.0)),
        ]),
        Member("Fourth Toad Star", 3, None, &[
            ("Vitality Damage", Pct(24.0)), ("Aether Damage", Pct(24.0)),
            ("Damage to Beasts", Pct(6.0)), ("pets Offensive Ability", Pct(3.0)),
        ]),
    ]),
    Entry("Typhos The Jailor of Souls", 2, &[(A, 6), (O, 3), (C, 3)], &[(A, 3), (O, 2)], &[
        Member("First Typhos The Jailor of Souls Star", 0, None, &[
            ("Offensive Ability", F(20.0)), ("pets Offensive Ability", Pct(3.0)),
        ]),
        Member("Second Typhos The Jailor of Souls Star", 1, None, &[
            ("Defensive Ability", F(20.0)), ("pets Defensive Ability", Pct(3.0)),
        ]),
        Member("Third Typhos The Jailor of Souls Star", 2, None, &[
            ("Poison and Acid Resistance", Pct(15.0)), ("Bleeding Resistance", Pct(15.0)),
            ("pets Poison and Acid Resistance", Pct(15.0)),
            ("pets Bleeding Resistance", Pct(15.0)),
        ]),
        Member("Fourth Typhos The Jailor of Souls Star", 3, Some(1), &[
            ("Physical Resistance", Pct(4.0)), ("pets Total Speed", Pct(6.0)),
            ("pets Physical Resistance", Pct(10.0)),
            ("pets Reduced Mind Control Seconds Duration", Pct(50.0)),
        ]),
        Member("Fifth Typhos The Jailor of Souls Star", 3, Some(2), &[
            ("Health", Pct(5.0)), ("Offensive Ability", F(20.0)),
            ("pets Offensive Ability", Pct(3.0)),
        ]),
        Member("Sixth Typhos The Jailor of Souls Star", 4, Some(2), &[
            ("Crit Damage", Pct(10.0)), ("pets Crit Damage", Pct(12.0)),
        ]),
    ]),
    Entry("Ulzaad Herald of Korvak", 2, &[(A, 8), (P, 6)], &[(E, 2), (A, 2)], &[
        Member("First Ulzaad Herald of Korvak Star", 0, None, &[("Physical Damage", Pct(40.0))]),
        Member("Second Ulzaad Herald of Korvak Star", 1, None, &[
            ("Defensive Ability", F(10.0)), ("Cold Resistance", Pct(15.0)),
            ("Poison and Acid Resistance", Pct(15.0)),
        ]),
        Member("Third Ulzaad Herald of Korvak Star", 2, Some(2), &[
            ("Health", F(80.0)), ("Chaos Resistance", Pct(10.0)),
        ]),
        Member("Fourth Ulzaad Herald of Korvak Star", 2, Some(1), &[
            ("Health", F(80.0)), ("Aether Resistance", Pct(10.0)),
        ]),
        Member("Fifth Ulzaad Herald of Korvak Star", 2, Some(3), &[
            ("Physical Damage", F(7.0)), ("Physical Damage", Pct(50.0)),
            ("Internal Trauma Damage", Pct(50.0)),
        ]),
        Member("Ulzaads Decree", 3, Some(3), &[
            ("Seconds Skill Recharge", F(22.0)), ("Second Duration", F(10.0)),
            ("Physical Damage", F(43.5)), ("Physical Damage", Pct(200.0)),
            ("Internal Trauma Damage", Pct(200.0)), ("Armor", F(150.0)),
            ("Physical Damage Retaliation", F(327.5)), ("Pierce Damage", Pct(200.0)),
        ]),
    ]),
    Entry("Unknown Soldier", 3, &[(A, 15), (O, 8)], &[], &[
        Member("First Unknown Soldier Star", 0, None, &[
            ("Pierce Damage", Pct(80.0)), ("Offensive Ability", F(15.0)),
        ]),
        Member("Second Unknown Soldier Star", 1, None, &[
            ("Bleeding Damage", F(54.0)), ("Bleeding Damage", Pct(80.0)),
        ]),
        Member("Third Unknown Soldier Star", 2, Some(1), &[
            ("Health", F(280.0)), ("Attack Speed", Pct(5.0)),
        ]),
        Member("Fourth Unknown Soldier Star", 2, Some(2), &[
            ("Pierce Damage", Pct(100.0)), ("Bleeding Damage", Pct(100.0)),
        ]),
        Member("Fifth Unknown Soldier Star", 3, Some(2), &[
            ("Health", Pct(4.0)), ("Offensive Ability", F(40.0)),
        ]),
        Member("Sixth Unknown Soldier Star", 4, Some(2), &[
            ("Pierce Damage", F(9.0)), ("Crit Damage", Pct(12.0)),
        ]),
        Member("Unknown Soldier", 5, Some(2), &[
            ("Seconds Skill Recharge", F(6.0)), ("Summon Limit", F(3.0)),
        ]),
    ]),
    Entry("Bards Harp", 2, &[(P, 6), (A, 6), (O, 3)], &[(P, 2), (O, 2)], &[
        Member("First Bards Harp Star", 0, None, &[
            ("Health", F(200.0)), ("Constitution", Pct(20.0)),
        ]),
        Member("Second Bards Harp Star", 1, None, &[
            ("Pierce Damage", Pct(40.0)), ("Elemental Damage", Pct(40.0)),
            ("Increases Energy Regeneration", Pct(10.0)),
        ]),
        Member("Third Bards Harp Star", 2, None, &[
            ("Pierce Resistance", Pct(15.0)), ("Bleeding Resistance", Pct(10.0)),
        ]),
        Member("Fourth Bards Harp Star", 3, None, &[
            ("Energy", Pct(10.0)), ("Energy Regenerated per Second", F(2.0)),
        ]),
        Member("Fourth Bards Harp Star II", 3, None, &[
            ("Energy", Pct(10.0)), ("Energy Regenerated per Second", F(2.0)),
        ]),
        Member("Fifth Bards Harp Star", 4, None, &[
            ("Pierce Damage", Pct(50.0)), ("Elemental Damage", Pct(50.0)),
            ("Elemental Resistance", Pct(15.0)),
        ]),
        Member("Inspiration", 5, None, &[
            ("Seconds Skill Recharge", F(12.0)), ("Seconds Duration", F(6.0)),
            ("Meter Radius", F(15.0)), ("Energy Restored", Pct(25.0)),
            ("Offensive Ability", F(110.0)), ("Defensive Ability", F(110.0)),
            ("Energy Regenerated per Second", F(7.0)), ("Slow Resistance", Pct(45.0)),
            ("Reduced Entrapment Duration", Pct(45.0)),
        ]),
    ]),
    Entry("Azraaka the Eternal Sands", 3, &[(A, 12), (P, 8), (O, 6)], &[], &[
        Member("First Azraaka the Eternal Sands Star", 0, None, &[
            ("Physical Damage", Pct(80.0)), ("Pierce Damage", Pct(80.0)),
        ]),
        Member("Second Azraaka the Eternal Sands Star", 1, None, &[
            ("Health", F(180.0)), ("Armor", F(90.0)),
        ]),
        Member("Third Azraaka the Eternal Sands Star", 2, None, &[
            ("Health", F(180.0)), ("Defensive Ability", F(50.0)), ("Movement Speed", Pct(6.0)),
        ]),
        Member("Fourth Azraaka the Eternal Sands Star", 3, Some(1), &[
            ("Defensive Ability", F(50.0)), ("Attack Speed", Pct(6.0)),
            ("Casting Speed", Pct(6.0)),
        ]),
        Member("Fifth Azraaka the Eternal Sands Star", 3, Some(2), &[
            ("Pierce Damage", F(10.0)), ("Pierce Damage", Pct(100.0)),
            ("Physical Damage", Pct(100.0)),
        ]),
        Member("Shifting Sands", 4, Some(2), &[
            ("Seconds Skill Recharge", Pct(50.0)), ("Seconds Duration", F(1.0)),
            ("Chance to pass through Enemies", Pct(100.0)), ("Meter Radius", F(2.0)),
            ("Weapon Damage", Pct(30.0)), ("Physical Damage", F(205.0)),
            ("Pierce Damage", F(301.0)), ("Crit Damage", Pct(40.0)),
            ("Reduced target Offensive Ability", F(140.0)),
            ("Chance of Impaired Aim to Target", Pct(25.0)),
        ]),
    ]),
    Entry("Shieldmaiden", 2, &[(P, 6), (O, 4)], &[(P, 3), (O, 2)], &[
        Member("First Shieldmaiden Star", 0, None, &[("Shield Damage Blocked", Pct(15.0))]),
        Member("Second Shieldmaiden Star", 1, None, &[
            ("Internal Trauma Damage", Pct(50.0)), ("to All Retaliation Damage", Pct(50.0)),
        ]),
        Member("Third Shieldmaiden Star", 2, Some(1), &[("Shield Block Chance", Pct(6.0))]),
        Member("Fourth Shieldmaiden Star", 3, Some(1), &[
            ("Internal Trauma Damage", F(60.0)), ("Physical Damage Retaliation", F(200.0)),
        ]),
        Member("Fifth Shieldmaiden Star", 2, Some(2), &[
            ("Reduced Stun Duration", Pct(25.0)), ("Shield Damage Blocked", Pct(20.0)),
        ]),
        Member("Sixth Shieldmaiden Star", 3, Some(2), &[
            ("Shield Recovery", Pct(25.0)), ("Shield Damage Blocked", Pct(10.0)),
        ]),
    ]),
    Entry("Ulo the Keeper of The Waters", 2, &[(P, 6), (O, 4)], &[(P, 3), (O, 2)], &[
        Member("First Ulo the Keeper of The Waters Star", 0, None, &[
            ("Elemental Resistance", Pct(10.0)), ("pets Elemental Resistance", Pct(10.0)),
        ]),
        Member("Second Ulo the Keeper of The Waters Star", 1, None, &[
            ("Health", F(200.0)), ("Energy", F(200.0)), ("Life Leech Resistance", Pct(30.0)),
            ("Energy Leech Resistance", Pct(30.0)),
        ]),
        Member("Third Ulo the Keeper of The Waters Star", 2, Some(1), &[
            ("Reduced Stun Duration", Pct(10.0)), ("Reduced Petrify Duration", Pct(10.0)),
            ("Reduced Freeze Duration", Pct(10.0)),
        ]),
        Member("Fourth Ulo the Keeper of The Waters Star", 2, Some(2), &[
            ("Poison and Acid Resistance", Pct(15.0)), ("Chaos Resistance", Pct(10.0)),
            ("pets Poison and Acid Resistance", Pct(15.0)), ("pets Chaos Resistance", Pct(10.0)),
        ]),
        Member("Cleansing Waters", 2, Some(3), &[
            ("Seconds Skill Recharge", F(16.0)), ("Second Duration", F(1.0)),
            ("Meter Radius", F(3.0)), ("Slow Target", Pct(50.0)), ("Slow Target", F(8.0)),
        ]),
    ]),
    Entry("Obelisk of Menhir", 3, &[(P, 15), (O, 8)], &[], &[
        Member("First Obelisk of Menhir Star", 0, None, &[("Armor", Pct(10.0))]),
        Member("Second Obelisk of Menhir Star", 1, Some(1), &[
            ("Physical Damage Retaliation", F(120.0)), ("to All Retaliation Damage", Pct(60.0)),
        ]),
        Member("Third Obelisk of Menhir Star", 2, Some(1), &[
            ("Shield Block Chance", Pct(5.0)), ("Shield Damage Blocked", Pct(30.0)),
        ]),
        Member("Fourth Obelisk of Menhir Star", 3, Some(1), &[
            ("Reduced Stun Duration", Pct(30.0)), ("Reduced Freeze Duration", Pct(30.0)),
            ("Increases Armor Absorption", Pct(18.0)), ("Maximum Pierce Resistance", Pct(3.0)),
        ]),
        Member("Fifth Obelisk of Menhir Star", 1, Some(2), &[
            ("Defensive Ability", F(30.0)), ("Armor", F(150.0)),
        ]),
        Member("Sixth Obelisk of Menhir Star", 2, Some(2), &[
            ("Defensive Ability", F(25.0)), ("Defensive Ability", Pct(25.0)),
        ]),
        Member("Stone Form", 4, Some(1), &[
            ("Seconds Skill Recharge", F(12.0)), ("Seconds Duration", F(8.0)),
            ("Meter Radius", F(15.0)), ("Damage Absorption", F(400.0)),
            ("Reduction in Bleeding Duration", Pct(50.0)),
            ("Reduction in Poison Duration", Pct(50.0)), ("to All Retaliation Damage", Pct(115.0)),
        ]),
    ]),
    Entry("Light of Empyrion", 3, &[(P, 18), (O, 8)], &[], &[
        Member("First Light of Empyrion Star", 0, None, &[
            ("Elemental Resistance", Pct(15.0)), ("pets Elemental Resistance", Pct(15.0)),
        ]),
        Member("Second Light of Empyrion Star", 1, None, &[
            ("Physical Damage", Pct(80.0)), ("Fire Damage", Pct(80.0)),
            ("Damage to Chthonics", Pct(10.0)), ("Defensive Ability", F(30.0)),
        ]),
        Member("Third Light of Empyrion Star", 2, None, &[
            ("Health", Pct(6.0)), ("pets Health", Pct(6.0)),
        ]),
        Member("Fourth Light of Empyrion Star", 3, None, &[
            ("Health", Pct(4.0)), ("Vitality Resistance", Pct(15.0)), ("pets Health", Pct(4.0)),
            ("pets Vitality Resistance", Pct(15.0)),
        ]),
        Member("Fifth Light of Empyrion Star", 4, None, &[
            ("Aether Resistance", Pct(20.0)), ("Chaos Resistance", Pct(20.0)),
            ("pets Aether Resistance", Pct(20.0)), ("pets Chaos Resistance", Pct(20.0)),
        ]),
        Member("Sixth Light of Empyrion Star", 5, None, &[
            ("Physical Damage", F(7.0)), ("Fire Damage", F(8.0)),
            ("Maximum Aether Resistance", Pct(3.0)), ("Maximum Chaos Resistance", Pct(3.0)),
        ]),
        Member("Light of Empyrion", 6, None, &[
            ("Seconds Skill Recharge", Pct(250.0)), ("Meter Target Area", F(5.0)),
            ("Weapon Damage", Pct(54.0)), ("Physical Damage", F(315.0)), ("Fire Damage", F(332.5)),
            ("Knockdown", Pct(150.0)), ("Reduced target Damage", Pct(24.0)),
            ("Damage to Undead", Pct(50.0)), ("Damage to Chthonics", Pct(50.0)),
            ("pets Maximum all Resistances", Pct(5.0)),
        ]),
    ]),
    Entry("Ishtak the Spring Maiden", 2, &[(P, 15), (O, 10)], &[], &[
        Member("First Ishtak the Spring Maiden Star", 0, None, &[
            ("Health", F(300.0)), ("Energy", F(300.0)), ("pets Physical Damage", F(8.0)),
        ]),
        Member("Second Ishtak the Spring Maiden Star", 1, None, &[
            ("Spirit", Pct(3.0)), ("Defensive Ability", Pct(3.0)),
            ("pets Defensive Ability", Pct(3.0)), ("pets Resistance to Life Reduction", Pct(20.0)),
        ]),
        Member("Third Ishtak the Spring Maiden Star", 2, None, &[
            ("Total Speed", Pct(4.0)), ("Slow Resistance", Pct(30.0)),
            ("pets Total Speed", Pct(6.0)),
        ]),
        Member("Fourth Ishtak the Spring Maiden Star", 3, None, &[
            ("Health", F(300.0)), ("Bleeding Resistance", Pct(20.0)),
            ("pets Bleeding Resistance", Pct(20.0)),
        ]),
        Member("Fifth Ishtak the Spring Maiden Star", 4, None, &[
            ("Health", F(300.0)), ("Poison and Acid Resistance", Pct(25.0)),
            ("pets Poison and Acid Resistance", Pct(25.0)),
        ]),
        Member("Natures Guardians", 5, None, &[
            ("Seconds Skill Recharge", F(15.0)), ("Seconds Duration", F(6.0)),
            ("Damage Absorption", Pct(25.0)), ("pets Physical Damage", F(40.0)),
            ("pets Offensive Ability", F(130.0)), ("pets Defensive Ability", F(130.0)),
        ]),
    ]),
    Entry("Tree of Life", 3, &[(O, 7), (P, 20)], &[], &[
        Member("First Tree of Life Star", 0, None, &[
            ("Health", Pct(5.0)), ("pets Health", Pct(5.0)),
        ]),
        Member("Second Tree of Life Star", 1, None, &[
            ("Health Regenerated Per Second", F(30.0)),
            ("pets Increases Health Regeneration", Pct(50.0)),
        ]),
        Member("Third Tree of Life Star", 2, Some(1), &[
            ("Health", Pct(8.0)), ("Increases Health Regeneration", Pct(50.0)),
            ("pets Health", Pct(5.0)),
        ]),
        Member("Fourth Tree of Life Star", 2, None, &[
            ("pets Increases Health Regeneration", Pct(50.0)), ("Defensive Ability", F(30.0)),
            ("Health Regenerated Per Second", F(50.0)),
        ]),
        Member("Fifth Tree of Life Star", 3, Some(2), &[
            ("pets Health Regenerated Per Second", F(80.0)),
            ("Increases Health Regeneration", Pct(50.0)), ("Health", Pct(8.0)),
        ]),
        Member("Healing Rain", 3, Some(3), &[
            ("Seconds Skill Recharge", F(12.0)), ("Seconds Duration", F(8.0)),
            ("Meter Radius", F(15.0)), ("Health Restored", Pct(10.0)),
            ("Health Restored", F(700.0)), ("Health Regenerated Per Second", F(180.0)),
            ("Increases Health Regeneration", Pct(60.0)),
            ("Energy Regenerated per Second", F(12.0)),
            ("Increases Energy Regeneration", Pct(55.0)),
        ]),
    ]),
    Entry("Korvak The Eldritch Sun", 3, &[(P, 18), (E, 10)], &[], &[
        Member("First Korvak The Eldritch Sun Star", 0, None, &[
            ("to All Damage", Pct(30.0)), ("pets to All Damage", Pct(30.0)),
        ]),
        Member("Second Korvak The Eldritch Sun Star", 1, None, &[
            ("Health", Pct(6.0)), ("pets Health", Pct(6.0)),
        ]),
        Member("Third Korvak The Eldritch Sun Star", 2, None, &[
            ("Chaos Resistance", Pct(20.0)), ("pets Chaos Resistance", Pct(20.0)),
        ]),
        Member("Fourth Korvak The Eldritch Sun Star", 3, Some(1), &[
            ("to All Damage", Pct(50.0)), ("Crit Damage", Pct(8.0)),
            ("pets to All Damage", Pct(30.0)), ("pets Crit Damage", Pct(8.0)),
        ]),
        Member("Fifth Korvak The Eldritch Sun Star", 3, Some(2), &[
            ("to All Damage", Pct(50.0)), ("pets to All Damage", Pct(30.0)),
            ("pets Offensive Ability", Pct(5.0)), ("Offensive Ability", Pct(5.0)),
        ]),
        Member("Eye Of Korvak", 3, Some(3), &[
            ("Seconds Skill Recharge", Pct(150.0)), ("Projectiles", F(6.0)),
            ("Meter Radius", F(1.0)), ("Chance to pass through Enemies", Pct(100.0)),
            ("Weapon Damage", Pct(18.0)), ("Chance to Petrify Target", Pct(50.0)),
            ("Chance to Petrify Target", Pct(150.0)),
            ("Reduced target Offensive Ability", F(130.0)),
            ("Reduced target Defensive Ability", F(130.0)),
        ]),
    ]),
    Entry("Vire the Stone Matron", 3, &[(P, 18), (A, 12)], &[], &[
        Member("First Vire the Stone Matron Star", 0, None, &[
            ("Health", F(200.0)), ("Armor", F(75.0)),
        ]),
        Member("Second Vire the Stone Matron Star", 1, None, &[
            ("Aether Resistance", Pct(10.0)), ("Chaos Resistance", Pct(10.0)),
            ("Physical Damage Retaliation", F(100.0)),
        ]),
        Member("Third Vire the Stone Matron Star", 2, None, &[
            ("Health", Pct(8.0)), ("Armor", F(40.0)), ("Shield Damage Blocked", Pct(12.0)),
        ]),
        Member("Fourth Vire the Stone Matron Star", 3, Some(1), &[
            ("Physical Damage", Pct(80.0)), ("Internal Trauma Damage", Pct(80.0)),
            ("Cunning", Pct(3.0)), ("to All Retaliation Damage", Pct(100.0)),
        ]),
        Member("Fifth Vire the Stone Matron Star", 3, Some(2), &[
            ("Physical Resistance", Pct(4.0)), ("Pierce Resistance", Pct(20.0)),
            ("Bleeding Resistance", Pct(20.0)),
        ]),
        Member("Fist of Vire", 4, Some(2), &[
            ("Seconds Skill Recharge", F(1.0)), ("Second Duration", F(1.0)),
            ("Meter Radius", Pct(250.0)), ("Weapon Damage", Pct(65.0)),
            ("of Retaliation Damage added to Attack", Pct(20.0)), ("Physical Damage", F(245.0)),
            ("Internal Trauma Damage", F(1220.0)), ("Reduced target Physical Damage", Pct(20.0)),
            ("Chance to Petrify Target", F(2.0)),
        ]),
    ]),
    Entry("Aeons Hourglass", 3, &[(P, 18), (C, 8)], &[], &[
        Member("First Aeons Hourglass Star", 0, None, &[
            ("Physique", F(40.0)), ("Cunning", F(40.0)), ("Spirit", F(40.0)),
        ]),
        Member("Second Aeons Hourglass Star", 1, None, &[
            ("Reduction in Internal Trauma Seconds Duration", Pct(25.0)),
            ("Reduction in Bleeding Seconds Duration", Pct(25.0)),
            ("Reduction in Poison Seconds Duration", Pct(25.0)),
            ("Reduction in Burn Seconds Duration", Pct(25.0)),
            ("Reduction in Frostbite Seconds Duration", Pct(25.0)),
            ("Reduction in Electrocute Seconds Duration", Pct(25.0)),
            ("Reduction in Vitality Decay Seconds Duration", Pct(25.0)),
        ]),
        Member("Third Aeons Hourglass Star", 2, None, &[
            ("Slow Resistance", Pct(50.0)), ("Reduced Entrapment Duration", Pct(30.0)),
            ("Reflected Damage Reduction", Pct(25.0)),
        ]),
        Member("Fourth Aeons Hourglass Star", 3, None, &[
            ("Vitality Resistance", Pct(15.0)), ("Aether Resistance", Pct(20.0)),
            ("Maximum Vitality Resistance", Pct(4.0)),
        ]),
        Member("Fifth Aeons Hourglass Star", 4, None, &[
            ("Defensive Ability", F(45.0)), ("Chance to Avoid Melee Attacks", Pct(6.0)),
            ("Chance to Avoid Projectiles", Pct(6.0)),
        ]),
        Member("Time Dilation", 5, None, &[
            ("Seconds to All Currently Active Skills Cooldowns", F(-6.0)),
            ("Seconds Skill Recharge", F(16.0)),
        ]),
    ]),
    Entry("Revenant", 2, &[(C, 8)], &[(P, 1), (C, 1)], &[
        Member("First Revenant Star", 0, None, &[
            ("Energy Leech Chance", F(40.0)), ("Energy Absorbed From Enemy Spells", Pct(15.0)),
        ]),
        Member("Second Revenant Star", 1, None, &[
            ("Less Damage from Undead", Pct(10.0)), ("Health", Pct(3.0)),
        ]),
        Member("Third Revenant Star", 2, None, &[
            ("Vitality Resistance", Pct(24.0)), ("pets Vitality Resistance", Pct(15.0)),
        ]),
        Member("Fourth Revenant Star", 3, None, &[
            ("Health", F(175.0)), ("of Attack Damage Converted To Health", Pct(6.0)),
        ]),
        Member("Fifth Revenant Star", 4, None, &[
            ("Attack Speed", Pct(4.0)), ("Casting Speed", Pct(4.0)),
        ]),
        Member("Raise the Dead", 5, None, &[
            ("Seconds Skill Recharge", F(2.0)), ("Summon Limit", F(6.0)),
        ]),
    ]),
    Entry("Dying God", 3, &[(P, 15), (C, 8)], &[], &[
        Member("First Dying God Star", 0, None, &[
            ("Vitality Damage", Pct(80.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Second Dying God Star", 1, None, &[
            ("Chaos Damage", Pct(80.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Third Dying God Star", 2, None, &[
            ("Spirit", F(35.0)), ("Offensive Ability", Pct(3.0)),
            ("pets to All Damage", Pct(30.0)), ("pets Attack Speed", Pct(5.0)),
        ]),
        Member("Fourth Dying God Star", 3, None, &[
            ("Offensive Ability", F(45.0)), ("Defensive Ability", F(25.0)),
            ("Chaos Resistance", Pct(15.0)),
        ]),
        Member("Fifth Dying God Star", 4, None, &[
            ("Vitality Damage", Pct(100.0)), ("Chaos Damage", Pct(100.0)),
        ]),
        Member("Sixth Dying God Star", 5, Some(1), &[
            ("Chaos Damage", F(11.5)), ("Crit Damage", Pct(4.0)),
            ("pets to All Damage", Pct(60.0)), ("pets Crit Damage", Pct(10.0)),
        ]),
        Member("Hungering Void", 5, Some(2), &[
            ("Seconds Skill Recharge", F(30.0)), ("Seconds Duration", F(20.0)),
            ("Meter Radius", F(12.0)), ("Crit Damage", Pct(18.0)), ("Vitality Damage", Pct(370.0)),
            ("Chaos Damage", Pct(370.0)), ("Total Speed", Pct(10.0)),
            ("Chaos Retaliation Damage", F(720.0)), ("Terrify Chance", Pct(70.0)),
            ("pets to All Damage", Pct(200.0)), ("pets Crit Damage", Pct(20.0)),
            ("pets Chance to Stun Target", Pct(10.0)), ("pets Chance to Stun Target", F(1.0)),
            ("pets Chance of Slow Target", Pct(56.0)), ("pets Chance of Slow Target", Pct(30.0)),
            ("pets Chance of Slow Target", F(3.0)),
        ]),
    ]),
    Entry("Yugol The Insatiable Night", 3, &[(E, 20), (C, 7)], &[], &[
        Member("First Yugol The Insatiable Night Star", 0, None, &[
            ("Cold Damage", Pct(80.0)), ("Offensive Ability", F(25.0)),
        ]),
        Member("Second Yugol The Insatiable Night Star", 1, None, &[
            ("Acid Damage", Pct(80.0)), ("Offensive Ability", F(25.0)),
        ]),
        Member("Third Yugol The Insatiable Night Star", 2, None, &[
            ("Vitality Resistance", Pct(25.0)), ("Reflected Damage Reduction", Pct(10.0)),
        ]),
        Member("Fourth Yugol The Insatiable Night Star", 3, Some(1), &[
            ("Cold Damage", Pct(100.0)), ("Acid Damage", Pct(100.0)), ("Spirit", Pct(3.0)),
        ]),
        Member("Fifth Yugol The Insatiable Night Star", 3, Some(2), &[
            ("Cold Damage", F(5.0)), ("Acid Damage", F(5.0)),
            ("of Attack Damage Converted To Health", Pct(6.0)),
            ("Life Leech Resistance", Pct(40.0)),
        ]),
        Member("Black Blood of Yugol", 4, Some(2), &[
            ("Seconds Skill Recharge", Pct(80.0)), ("Summon Limit", F(6.0)),
            ("Meter Radius", F(3.0)),
        ]),
    ]),
    Entry("Wendigo", 2, &[(P, 6), (C, 4)], &[(C, 2)], &[
        Member("First Wendigo Star", 0, None, &[
            ("Vitality Damage", Pct(40.0)), ("Vitality Decay", Pct(40.0)),
        ]),
        Member("Second Wendigo Star", 1, None, &[("Spirit", F(20.0)), ("Health", F(150.0))]),
        Member("Third Wendigo Star", 2, None, &[
            ("Casting Speed", Pct(5.0)), ("Physical Resistance", Pct(4.0)),
            ("Attack Speed", Pct(5.0)),
        ]),
        Member("Fourth Wendigo Star", 3, None, &[
            ("Less Damage From Beasts", Pct(10.0)), ("Health", Pct(5.0)),
        ]),
        Member("Fifth Wendigo Star", 4, None, &[
            ("Vitality Decay", F(36.0)), ("Vitality Decay", Pct(50.0)),
            ("Vitality Damage", Pct(50.0)),
        ]),
        Member("Wendigos Mark", 5, None, &[
            ("Seconds Duration", F(10.0)), ("Vitality Damage", F(210.0)),
            ("of Attack Damage Converted To Health", Pct(65.0)),
        ]),
    ]),
    Entry("Hydra", 2, &[(E, 5), (A, 3), (C, 3)], &[(E, 3), (C, 2)], &[
        Member("First Hydra Star", 0, None, &[("Offensive Ability", F(25.0))]),
        Member("Second Hydra Star", 1, None, &[("Offensive Ability", F(35.0))]),
        Member("Third Hydra Star", 2, Some(3), &[
            ("Attack Speed", Pct(5.0)), ("to All Damage", Pct(50.0)),
        ]),
        Member("Fourth Hydra Star", 2, Some(2), &[
            ("of Attack Damage Converted To Health", Pct(4.0)), ("Attack Speed", Pct(5.0)),
        ]),
        Member("Fourth Hydra Star II", 2, Some(2), &[
            ("of Attack Damage Converted To Health", Pct(4.0)), ("Attack Speed", Pct(5.0)),
        ]),
        Member("Fifth Hydra Star", 2, Some(1), &[
            ("Offensive Ability", F(25.0)), ("Physical Damage", F(6.0)),
        ]),
        Member("Sixth Hydra Star", 3, Some(1), &[
            ("Offensive Ability", Pct(4.0)), ("Slow Resistance", Pct(20.0)),
            ("Physical Damage", F(12.0)),
        ]),
    ]),
    Entry("Ulzuins Torch", 3, &[(E, 15), (C, 8)], &[], &[
        Member("First Ulzuins Torch Star", 0, None, &[
            ("Offensive Ability", F(20.0)), ("Fire Damage", Pct(80.0)),
        ]),
        Member("Second Ulzuins Torch Star", 1, None, &[
            ("Chaos Resistance", Pct(15.0)), ("Offensive Ability", Pct(5.0)),
        ]),
        Member("Third Ulzuins Torch Star", 2, None, &[
            ("Movement Speed", Pct(5.0)), ("Crit Damage", Pct(5.0)),
        ]),
        Member("Fourth Ulzuins Torch Star", 3, Some(1), &[("Burn Damage", Pct(100.0))]),
        Member("Fifth Ulzuins Torch Star", 3, Some(2), &[
            ("Fire Resistance", Pct(20.0)), ("Fire Damage", Pct(100.0)),
        ]),
        Member("Sixth Ulzuins Torch Star", 4, Some(2), &[
            ("Burn Damage", F(54.0)), ("Burn Damage", Pct(100.0)),
            ("Maximum Fire Resistance", Pct(3.0)),
        ]),
        Member("Meteor Shower", 4, Some(1), &[
            ("Seconds Skill Recharge", Pct(350.0)), ("Seconds Duration", F(3.0)),
            ("Projectiles", F(1.0)), ("Meter Target Area", F(5.0)), ("Meter Radius", Pct(240.0)),
            ("Physical Damage", F(197.5)), ("Fire Damage", F(211.0)), ("Burn Damage", F(410.0)),
        ]),
    ]),
    Entry("Hyrian Guardian of the Celestial Gates", 2, &[(E, 8), (A, 6)], &[(P, 2), (A, 2)], &[
        Member("First Hyrian Guardian of the Celestial Gates Star", 0, None, &[
            ("Elemental Damage", Pct(40.0)), ("to All Retaliation Damage", Pct(40.0)),
        ]),
        Member("Second Hyrian Guardian of the Celestial Gates Star", 1, None, &[
            ("Pierce Resistance", Pct(10.0)), ("Shield Damage Blocked", Pct(20.0)),
        ]),
        Member("Third Hyrian Guardian of the Celestial Gates Star", 2, None, &[
            ("Health", F(200.0)), ("Healing Effects Increased", Pct(10.0)), ("Armor", Pct(8.0)),
        ]),
        Member("Fourth Hyrian Guardian of the Celestial Gates Star", 3, Some(1), &[
            ("Elemental Damage", F(12.0)), ("Shield Damage Blocked", Pct(35.0)),
            ("to All Retaliation Damage", Pct(60.0)),
        ]),
        Member("Fifth Hyrian Guardian of the Celestial Gates Star", 3, Some(2), &[
            ("Elemental Resistance", Pct(15.0)), ("Elemental Damage", Pct(50.0)),
            ("Armor", Pct(8.0)),
        ]),
        Member("Hyrians Glare", 4, Some(2), &[
            ("Seconds Skill Recharge", F(2.0)), ("Meter Range", F(10.0)),
            ("Weapon Damage", Pct(70.0)), ("of Retaliation Damage added to Attack", Pct(26.0)),
            ("Elemental Damage", F(280.0)), ("Chance to Confuse", Pct(100.0)),
            ("Chance to Confuse", F(1.0)),
        ]),
    ]),
    Entry("Magi", 2, &[(E, 10)], &[(E, 3)], &[
        Member("First Magi Star", 0, None, &[
            ("Fire Damage", Pct(40.0)), ("Burn Damage", Pct(50.0)),
        ]),
        Member("Second Magi Star", 1, None, &[
            ("Elemental Resistance", Pct(8.0)), ("Defensive Ability", F(10.0)),
        ]),
        Member("Third Magi Star", 2, None, &[
            ("Defensive Ability", F(10.0)), ("Fire Resistance", Pct(25.0)),
            ("Reduced Entrapment Duration", Pct(15.0)),
        ]),
        Member("Fourth Magi Star", 3, Some(1), &[
            ("Fire Damage", F(10.5)), ("Fire Damage", Pct(40.0)),
        ]),
        Member("Fifth Magi Star", 3, Some(2), &[
            ("Casting Speed", Pct(5.0)), ("Physique", F(15.0)), ("Burn Damage", Pct(100.0)),
            ("Attack Speed", Pct(5.0)),
        ]),
        Member("Sixth Magi Star", 3, Some(3), &[
            ("Burn Damage", F(36.0)), ("Burn Damage", Pct(50.0)),
        ]),
        Member("Fissure", 4, Some(3), &[
            ("Seconds Skill Recharge", Pct(150.0)), ("Seconds Duration", F(5.0)),
            ("Fragments", F(7.0)), ("Meter Radius", F(1.0)), ("Fire Damage", F(179.0)),
            ("Burn Damage", F(328.0)), ("Chance to Stun", Pct(25.0)),
            ("Chance to Stun", Pct(150.0)),
        ]),
    ]),
    Entry("Oklaines Lantern", 2, &[(E, 10)], &[(E, 3), (O, 2)], &[
        Member("First Oklaines Lantern Star", 0, None, &[
            ("Increases Energy Regeneration", Pct(15.0)),
        ]),
        Member("Second Oklaines Lantern Star", 1, None, &[
            ("Offensive Ability", F(25.0)), ("Defensive Ability", F(20.0)),
        ]),
        Member("Third Oklaines Lantern Star", 2, None, &[
            ("Crit Damage", Pct(5.0)), ("Offensive Ability", F(15.0)),
        ]),
        Member("Fourth Oklaines Lantern Star", 3, None, &[
            ("to All Damage", Pct(50.0)), ("Reduced Entrapment Duration", Pct(25.0)),
        ]),
        Member("Fifth Oklaines Lantern Star", 4, None, &[
            ("Energy Regenerated per Second", F(2.0)), ("Casting Speed", Pct(5.0)),
            ("Attack Speed", Pct(5.0)),
        ]),
    ]),
    Entry("Behemoth", 2, &[(P, 4), (E, 4), (C, 3)], &[(E, 3), (C, 2)], &[
        Member("First Behemoth Star", 0, None, &[("Health Regenerated Per Second", F(15.0))]),
        Member("Second Behemoth Star", 1, None, &[("Health", F(300.0)), ("pets Health", Pct(5.0))]),
        Member("Third Behemoth Star", 2, Some(1), &[
            ("Health Regenerated Per Second", F(30.0)), ("Healing Effects Increased", Pct(6.0)),
        ]),
        Member("Fourth Behemoth Star", 2, Some(2), &[("Armor", F(80.0)), ("Health", Pct(5.0))]),
        Member("Fifth Behemoth Star", 2, Some(3), &[
            ("Increases Health Regeneration", Pct(50.0)),
            ("pets Increases Health Regeneration", Pct(100.0)),
        ]),
        Member("Giants blood", 2, Some(4), &[
            ("Seconds Skill Recharge", F(25.0)), ("Seconds Duration", F(10.0)),
            ("Health Restored", Pct(20.0)), ("Health Restored", F(1200.0)),
            ("Health Regenerated Per Second", F(440.0)),
        ]),
    ]),
    Entry("Abomination", 3, &[(E, 18), (C, 8)], &[], &[
        Member("First Abomination Star", 0, None, &[
            ("Chaos Damage", Pct(80.0)), ("Poison Damage", Pct(80.0)),
        ]),
        Member("Second Abomination Star", 1, None, &[
            ("Acid Damage", Pct(80.0)), ("Vitality Damage", Pct(80.0)),
            ("Vitality Decay", Pct(80.0)),
        ]),
        Member("Third Abomination Star", 2, None, &[
            ("Offensive Ability", F(40.0)), ("Poison and Acid Resistance", Pct(20.0)),
            ("Maximum Poison and Acid Resistance", Pct(3.0)),
        ]),
        Member("Fourth Abomination Star", 3, Some(1), &[
            ("Chaos Damage", Pct(80.0)), ("Health", F(250.0)), ("Offensive Ability", F(30.0)),
            ("Vitality Damage", Pct(80.0)),
        ]),
        Member("Fifth Abomination Star", 3, Some(2), &[
            ("Poison Damage", Pct(80.0)), ("Health", F(250.0)), ("Offensive Ability", F(30.0)),
            ("Vitality Decay", Pct(80.0)),
        ]),
        Member("Sixth Abomination Star", 4, Some(2), &[
            ("Acid Damage", F(12.0)), ("Acid Damage", Pct(100.0)), ("Poison Damage", Pct(100.0)),
        ]),
        Member("Abominable Might", 4, Some(1), &[
            ("Seconds Skill Recharge", F(18.0)), ("Seconds Duration", F(12.0)),
            ("Chaos Damage", F(94.5)), ("Chaos Damage", Pct(260.0)),
            ("Physical Damage Converted to Chaos Damage", Pct(50.0)),
            ("Increases Health Regeneration", Pct(100.0)), ("Vitality Damage", Pct(310.0)),
            ("Vitality Decay", Pct(310.0)),
        ]),
        Member("Tainted Eruption", 5, Some(2), &[
            ("Seconds Skill Recharge", F(3.0)), ("Meter Target Area", F(10.0)),
            ("Poison Damage", F(1560.0)), ("Chance to Confuse", Pct(180.0)),
        ]),
    ]),
    Entry("Murmur Mistress of Rumors", 2, &[(E, 6), (P, 6), (C, 3)], &[(E, 2), (C, 2)], &[
        Member("First Murmur Mistress of Rumors Star", 0, None, &[
            ("Cold Damage", Pct(40.0)), ("Acid Damage", Pct(40.0)),
        ]),
        Member("Second Murmur Mistress of Rumors Star", 1, None, &[
            ("Chance to Avoid Melee Attacks", Pct(3.0)), ("Chance to Avoid Projectiles", Pct(3.0)),
        ]),
        Member("Third Murmur Mistress of Rumors Star", 2, None, &[
            ("Defensive Ability", F(15.0)), ("Health", F(150.0)),
        ]),
        Member("Rumor", 3, None, &[
            ("Seconds Skill Recharge", F(1.0)), ("Seconds Duration", F(4.0)),
            ("Cold Damage", F(97.0)), ("Acid Damage", F(97.0)), ("Offensive Ability", F(-96.0)),
            ("Cold Resistance", Pct(-23.0)), ("Poison and Acid Resistance", Pct(-30.0)),
        ]),
        Member("Fourth Murmur Mistress of Rumors Star", 4, Some(2), &[
            ("Defensive Ability", F(15.0)), ("Vitality Resistance", Pct(10.0)),
        ]),
        Member("Fifth Murmur Mistress of Rumors Star", 4, Some(1), &[
            ("Cold Damage", Pct(50.0)), ("Acid Damage", Pct(50.0)),
        ]),
    ]),
    Entry("Alladrahs Phoenix", 2, &[(E, 6), (P, 6), (O, 3)], &[(E, 2), (A, 2)], &[
        Member("First Alladrahs Phoenix Star", 0, None, &[
            ("Aether Damage", Pct(40.0)), ("Elemental Damage", Pct(40.0)),
        ]),
        Member("Second Alladrahs Phoenix Star", 1, None, &[
            ("Health", F(225.0)), ("Chaos Resistance", Pct(12.0)), ("Fire Retaliation", F(200.0)),
        ]),
        Member("Third Alladrahs Phoenix Star", 2, None, &[
            ("Aether Damage", Pct(30.0)), ("Elemental Damage", Pct(30.0)),
            ("Increases Health Regeneration", Pct(20.0)),
        ]),
        Member("Fourth Alladrahs Phoenix Star", 3, None, &[
            ("Crit Damage", Pct(10.0)), ("Fire Damage", Pct(50.0)), ("Burn Damage", Pct(100.0)),
            ("to All Retaliation Damage", Pct(60.0)),
        ]),
        Member("Phoenix Fire", 4, None, &[
            ("Seconds Skill Recharge", F(12.0)), ("Seconds Duration", F(7.0)),
            ("Meter Target Area", F(5.0)), ("Damage Absorbtion", F(168.0)),
            ("Fire Damage", F(92.0)), ("Aether Damage", F(92.0)), ("Burn Damage", F(232.0)),
            ("Burn Retaliation", F(1395.0)), ("to All Retaliation Damage", Pct(140.0)),
        ]),
    ]),
    Entry("Hand of Ultos", 3, &[(E, 10), (P, 10), (C, 6)], &[], &[
        Member("First Ultos Shepherd of Storms", 0, None, &[
            ("Cold Damage", Pct(80.0)), ("Offensive Ability", F(25.0)),
        ]),
        Member("Second Ultos Shepherd of Storms Star", 1, None, &[
            ("Lightining Damage", Pct(80.0)), ("Offensive Ability", F(25.0)),
        ]),
        Member("Third Ultos Shepherd of Storms Star", 2, Some(1), &[
            ("Health", F(180.0)), ("Chaos Resistance", Pct(15.0)),
        ]),
        Member("Fourth Ultos Shepherd of Storms Star", 2, Some(2), &[
            ("Crit Damage", Pct(5.0)), ("Electrocute Damage", Pct(120.0)),
            ("Offensive Ability", F(20.0)),
        ]),
        Member("Fifth Ultos Shepherd of Storms Star", 3, Some(2), &[
            ("Lightining Damage", F(11.5)), ("Lightining Damage", Pct(100.0)),
            ("Cold Damage", Pct(100.0)),
        ]),
        Member("Hand of Ultos", 4, Some(2), &[
            ("Seconds Skill Recharge", Pct(150.0)), ("Affected Targets", F(10.0)),
            ("Weapon Damage", Pct(20.0)), ("Lightining Damage", F(328.0)),
            ("Electrocute Damage", F(510.0)), ("Chance to Stun", Pct(40.0)),
            ("Reduced target Elemental Resistances", Pct(20.0)),
        ]),
    ]),
    Entry("Blind Sage", 3, &[(E, 18), (A, 10)], &[], &[
        Member("First Blind Sage Star", 0, None, &[
            ("Physique", F(30.0)), ("Spirit", F(30.0)), ("Offensive Ability", F(25.0)),
        ]),
        Member("Second Blind Sage Star", 1, None, &[
            ("Elemental Resistance", Pct(15.0)), ("Offensive Ability", F(25.0)),
            ("Elemental Damage", Pct(80.0)),
        ]),
        Member("Third Blind Sage Star", 2, None, &[
            ("Crit Damage", Pct(12.0)), ("Defensive Ability", F(25.0)),
            ("Skill Disruption Protection", Pct(30.0)),
        ]),
        Member("Fourth Blind Sage Star", 3, Some(1), &[("Cold Damage", Pct(100.0))]),
        Member("Fifth Blind Sage Star", 3, Some(2), &[
            ("Lightining Damage", Pct(100.0)), ("Electrocute Damage", Pct(200.0)),
        ]),
        Member("Sixth Blind Sage Star", 3, Some(3), &[
            ("Fire Damage", F(100.0)), ("Burn Damage", Pct(200.0)),
        ]),
        Member("Elemental Seeker", 4, Some(3), &[
            ("Seconds Skill Recharge", Pct(120.0)), ("Meter Radius", F(1.0)),
        ]),
    ]),
    Entry("Affliction", 2, &[(E, 4), (A, 4), (C, 3)], &[(E, 1), (A, 1)], &[
        Member("First Affliction Star", 0, None, &[
            ("Vitality Damage", Pct(40.0)), ("Poison Damage", Pct(40.0)),
        ]),
        Member("Second Affliction Star", 1, None, &[
            ("Acid Retaliation", F(60.0)), ("Spirit", F(20.0)), ("Offensive Ability", F(20.0)),
        ]),
        Member("Fetid Pool", 2, None, &[
            ("Seconds Skill Recharge", F(2.0)), ("Seconds Duration", F(6.0)),
            ("Meter Radius", F(3.0)), ("of Retaliation Damage added to Attack", Pct(7.0)),
            ("Vitality Damage", F(370.0)), ("Poison Damage", F(290.0)), ("Slow Target", Pct(30.0)),
            ("Slow Target", F(2.0)),
        ]),
        Member("Third Affliction Star", 3, Some(1), &[
            ("Vitality Damage", F(5.0)), ("Offensive Ability", Pct(3.0)),
            ("to All Retaliation Damage", Pct(20.0)),
        ]),
        Member("Fourth Affliction Star", 4, Some(1), &[
            ("Vitality Damage", F(7.5)), ("Crit Damage", Pct(10.0)), ("Acid Retaliation", F(60.0)),
        ]),
        Member("Fifth Affliction Star", 3, Some(2), &[
            ("Acid Damage", Pct(50.0)), ("Vitality Damage", Pct(50.0)),
            ("Acid Retaliation", F(120.0)),
        ]),
        Member("Sixth Affliction Star", 4, Some(2), &[
            ("Vitality Decay", Pct(50.0)), ("to All Retaliation Damage", Pct(50.0)),
        ]),
    ]),
    Entry("Mogdrogen The Wolf", 3, &[(A, 15), (E, 12)], &[], &[
        Member("First Mogdrogen The Wolf Star", 0, None, &[
            ("Offensive Ability", F(35.0)), ("pets Offensive Ability", Pct(3.0)),
        ]),
        Member("Second Mogdrogen The Wolf Star", 1, None, &[
            ("Bleeding Damage", Pct(80.0)), ("pets to All Damage", Pct(30.0)),
        ]),
        Member("Third Mogdrogen The Wolf Star", 2, None, &[
            ("Defensive Ability", F(30.0)), ("Vitality Resistance", Pct(20.0)),
            ("pets Total Speed", Pct(6.0)),
        ]),
        Member("Fourth Mogdrogen The Wolf Star", 3, None, &[
            ("Bleeding Damage", F(54.0)), ("Bleeding Damage", Pct(80.0)),
            ("pets Bleeding Damage", F(24.0)), ("of Attack Damage Converted To Health", Pct(6.0)),
        ]),
        Member("Fifth Mogdrogen The Wolf Star", 4, None, &[
            ("Elemental Resistance", Pct(15.0)), ("Bleeding Resistance", Pct(15.0)),
            ("Max Bleeding Resistance", Pct(3.0)), ("pets to All Damage", Pct(80.0)),
        ]),
        Member("Howl of Mogdrogen", 5, None, &[
            ("Seconds Skill Recharge", F(15.0)), ("Seconds Duration", F(10.0)),
            ("Bleeding Damage", F(174.0)), ("Bleeding Damage", Pct(275.0)),
            ("Reduced target Defensive Ability", F(144.0)), ("Attack Speed", Pct(18.0)),
            ("pets Bleeding Damage", F(96.0)), ("pets Offensive Ability", Pct(15.0)),
            ("pets Total Speed", Pct(40.0)),
        ]),
    ]),
    Entry("Rattosh the Veilwarden", 3, &[(E, 10), (C, 6), (O, 6)], &[], &[
        Member("First Rattosh the Veilwarden Star", 0, None, &[
            ("Health", F(150.0)), ("Offensive Ability", F(30.0)),
        ]),
        Member("Second Rattosh the Veilwarden Star", 1, None, &[
            ("Vitality Damage", Pct(80.0)), ("Aether Damage", Pct(80.0)),
        ]),
        Member("Third Rattosh the Veilwarden Star", 2, None, &[
            ("Vitality Decay", Pct(150.0)), ("Offensive Ability", F(45.0)),
        ]),
        Member("Fourth Rattosh the Veilwarden Star", 3, None, &[
            ("Vitality Decay", F(54.0)), ("Aether Damage", Pct(100.0)),
            ("Vitality Damage", Pct(100.0)),
        ]),
        Member("Fifth Rattosh the Veilwarden Star", 4, None, &[
            ("Vitality Damage", F(10.0)), ("Pierce Resistance", Pct(15.0)),
            ("Bleeding Resistance", Pct(15.0)),
        ]),
        Member("Will of Rattosh", 5, None, &[
            ("Seconds Duration", F(8.0)), ("Vitality Damage", F(160.0)),
            ("Aether Damage", F(185.0)), ("Vitality Resistance", Pct(-25.0)),
            ("Life Leech Resistance", Pct(-8.0)),
        ]),
    ]),
    Entry("Huntress", 2, &[(A, 4), (E, 4), (C, 3)], &[(E, 1), (A, 1)], &[
        Member("First Huntress Star", 0, None, &[("Offensive Ability", F(15.0))]),
        Member("Second Huntress Star", 1, None, &[
            ("Cunning", F(20.0)), ("Pierce Damage", Pct(50.0)),
        ]),
        Member("Third Huntress Star", 2, None, &[
            ("Offensive Ability", F(15.0)), ("Bleeding Damage", Pct(60.0)),
        ]),
        Member("Fourth Huntress Star", 3, Some(1), &[
            ("Health", F(100.0)), ("Damage to Beasts", Pct(8.0)), ("Pierce Resistance", Pct(8.0)),
            ("pets Health", Pct(8.0)),
        ]),
        Member("Fifth Huntress Star", 3, None, &[
            ("Offensive Ability", Pct(3.0)), ("pets Offensive Ability", Pct(5.0)),
        ]),
        Member("Sixth Huntress Star", 4, Some(2), &[
            ("Bleeding Damage", F(33.0)), ("Bleeding Damage", Pct(50.0)),
            ("pets Bleeding Damage", F(18.0)),
        ]),
        Member("Rend", 4, Some(3), &[
            ("Seconds Duration", F(5.0)), ("Meter Radius", F(5.0)), ("Bleeding Damage", F(285.0)),
            ("Offensive Ability", F(-150.0)), ("Bleeding Resistance", Pct(-32.0)),
        ]),
    ]),
    Entry("Wolverine", 1, &[(A, 1)], &[(A, 6)], &[
        Member("First Wolverine Star", 0, None, &[
            ("Defensive Ability", F(15.0)), ("pets Pierce Resistance", Pct(10.0)),
        ]),
        Member("Second Wolverine Star", 1, None, &[
            ("to All Retaliation Damage", Pct(30.0)), ("pets Vitality Resistance", Pct(8.0)),
        ]),
        Member("Third Wolverine Star", 2, None, &[
            ("Defensive Ability", F(25.0)), ("pets Poison and Acid Resistance", Pct(8.0)),
        ]),
        Member("Fourth Wolverine Star", 3, Some(1), &[
            ("to All Retaliation Damage", Pct(50.0)), ("pets Bleeding Resistance", Pct(25.0)),
        ]),
        Member("Fifth Wolverine Star", 3, Some(2), &[
            ("Defensive Ability", Pct(4.0)), ("Physique Requirement for Melee Weapons", Pct(10.0)),
            ("Cunning Requirement for Melee Weapons", Pct(10.0)),
            ("pets Defensive Ability", Pct(5.0)),
        ]),
    ]),
    Entry("Crab", 2, &[(A, 6), (O, 4)], &[(A, 3)], &[
        Member("First Crab Star", 0, None, &[("Physique", F(25.0)), ("Constitution", Pct(15.0))]),
        Member("Second Crab Star", 1, None, &[
            ("Physical Damage", Pct(40.0)), ("Elemental Damage", Pct(40.0)),
            ("Internal Trauma Damage", Pct(40.0)),
        ]),
        Member("Third Crab Star", 3, None, &[
            ("Defensive Ability", F(55.0)), ("Pierce Resistance", Pct(18.0)),
        ]),
        Member("Fourth Crab Star", 4, None, &[
            ("Elemental Damage", F(10.0)), ("Elemental Damage", Pct(40.0)),
            ("Elemental Resistance", Pct(15.0)),
        ]),
        Member("Arcane Barrier", 2, None, &[
            ("Damage Absorbtion", F(2260.0)), ("Seconds Skill Recharge", F(3.0)),
        ]),
    ]),
    Entry("Autumn Boar", 2, &[(P, 4), (A, 4), (O, 3)], &[(A, 3)], &[
        Member("First Autumn Boar Star", 0, None, &[
            ("Physique", F(20.0)), ("Cunning", F(20.0)), ("to All Retaliation Damage", Pct(25.0)),
        ]),
        Member("Second Autumn Boar Star", 1, None, &[
            ("Physique", F(15.0)), ("Pierce Resistance", Pct(15.0)),
        ]),
        Member("Third Autumn Boar Star", 2, None, &[
            ("Physique", Pct(5.0)), ("to All Retaliation Damage", Pct(25.0)),
        ]),
        Member("Fourth Autumn Boar Star", 3, Some(1), &[
            ("Physical Resistance", Pct(4.0)), ("Defensive Ability", F(25.0)),
        ]),
        Member("Fifth Autumn Boar Star", 3, None, &[
            ("Defensive Ability", F(30.0)), ("to All Retaliation Damage", Pct(25.0)),
        ]),
        Member("Sixth Autumn Boar Star", 4, Some(2), &[
            ("Physical Damage Retaliation", F(150.0)), ("Reflected Damage Reduction", Pct(10.0)),
        ]),
        Member("Trample", 4, Some(3), &[
            ("Seconds Skill Recharge", Pct(30.0)), ("Meter Radius", Pct(10.0)),
            ("Chance to pass through Enemies", Pct(100.0)), ("Weapon Damage", Pct(55.0)),
            ("of Retaliation Damage added to Attack", Pct(14.0)),
            ("Internal Trauma Damage", F(570.0)),
        ]),
    ]),
    Entry("Rhowans Scepter", 2, &[(A, 6), (O, 4)], &[(A, 3), (O, 2)], &[
        Member("First Rhowans Scepter Star", 0, None, &[("Defensive Ability", F(20.0))]),
        Member("Second Rhowans Scepter Star", 1, None, &[("Health", Pct(6.0))]),
        Member("Third Rhowans Scepter Star", 2, Some(1), &[
            ("Defensive Ability", F(30.0)), ("Armor", F(40.0)),
        ]),
        Member("Fourth Rhowans Scepter Star", 2, Some(2), &[
            ("Physical Damage", Pct(50.0)), ("Reduced Petrify Duration", Pct(25.0)),
        ]),
        Member("Fifth Rhowans Scepter Star", 3, Some(2), &[
            ("Internal Trauma Damage", F(50.0)), ("Internal Trauma Damage", Pct(80.0)),
        ]),
        Member("Sixth Rhowans Scepter Star", 3, Some(1), &[
            ("Internal Trauma Damage", F(75.0)), ("Internal Trauma Damage", Pct(50.0)),
        ]),
    ]),
    Entry("Oleron", 3, &[(A, 20), (O, 7)], &[], &[
        Member("First Oleron Star", 0, None, &[
            ("Physique", F(30.0)), ("Cunning", F(30.0)), ("Health", F(100.0)),
        ]),
        Member("Second Oleron Star", 1, None, &[
            ("Physical Damage", Pct(80.0)), ("Internal Trauma Damage", Pct(80.0)),
            ("Bleeding Damage", Pct(80.0)),
        ]),
        Member("Third Oleron Star", 2, None, &[
            ("Offensive Ability", F(30.0)), ("Armor", F(80.0)), ("Bleeding Resistance", Pct(10.0)),
        ]),
        Member("Fourth Oleron Star", 3, None, &[
            ("Health", F(200.0)), ("Physical Resistance", Pct(4.0)),
        ]),
        Member("Fifth Oleron Star", 4, Some(1), &[
            ("Internal Trauma Damage", F(90.0)), ("Internal Trauma Damage", Pct(100.0)),
            ("Offensive Ability", F(15.0)), ("Maximum Pierce Resistance", Pct(2.0)),
        ]),
        Member("Sixth Oleron Star", 4, Some(2), &[
            ("Physical Damage", F(12.0)), ("Physical Damage", Pct(100.0)),
            ("Bleeding Damage", Pct(100.0)),
        ]),
        Member("Blind Fury", 4, Some(3), &[
            ("Seconds Skill Recharge", F(1.0)), ("Meter Target Area", F(5.0)),
            ("Weapon Damage", Pct(75.0)), ("Physical Damage", F(155.0)),
            ("Internal Trauma Damage", F(580.0)), ("Bleeding Damage", F(580.0)),
            ("Slower Enemy Attack", Pct(30.0)),
        ]),
    ]),
    Entry("Leviathan", 3, &[(E, 13), (A, 13)], &[], &[
        Member("First Leviathan Star", 0, None, &[
            ("Cold Damage", F(6.0)), ("Cold Damage", Pct(80.0)),
        ]),
        Member("Second Leviathan Star", 1, None, &[("Physique", F(35.0)), ("Health", Pct(5.0))]),
        Member("Third Leviathan Star", 2, None, &[
            ("Energy", Pct(10.0)), ("Defensive Ability", F(40.0)),
            ("Increases Energy Regeneration", Pct(20.0)),
        ]),
        Member("Fourth Leviathan Star", 3, None, &[
            ("Pierce Resistance", Pct(20.0)), ("Physical Resistance", Pct(4.0)),
        ]),
        Member("Fifth Leviathan Star", 4, Some(1), &[]),
        Member("Sixth Leviathan Star", 4, Some(2), &[
            ("Cold Damage", F(9.0)), ("Cold Damage", Pct(100.0)),
        ]),
        Member("Whirpool", 4, Some(3), &[
            ("Seconds Skill Recharge", F(2.0)), ("Seconds Duration", F(6.0)),
            ("Meter Radius", Pct(350.0)), ("Cold Damage", F(420.0)),
            ("Slower target Movement", Pct(40.0)),
        ]),
    ]),
    Entry("Attak Seru The Mirage", 3, &[(A, 16), (E, 14)], &[], &[
        Member("First Attak Seru The Mirage Star", 0, None, &[
            ("Defensive Ability", F(25.0)), ("Aether Damage", Pct(80.0)),
        ]),
        Member("Second Attak Seru The Mirage Star", 1, None, &[
            ("Elemental Damage", Pct(80.0)), ("Defensive Ability", F(25.0)),
        ]),
        Member("Third Attak Seru The Mirage Star", 2, None, &[
            ("Pierce Resistance", Pct(25.0)), ("Bleeding Resistance", Pct(25.0)),
        ]),
        Member("Fourth Attak Seru The Mirage Star", 3, None, &[
            ("Defensive Ability", Pct(4.0)), ("Health", F(300.0)),
        ]),
        Member("Fifth Attak Seru The Mirage Star", 4, Some(1), &[
            ("Elemental Damage", F(13.0)), ("Elemental Damage", Pct(100.0)),
            ("Aether Damage", Pct(100.0)),
        ]),
        Member("Arcane Currents", 4, Some(2), &[
            ("Seconds Skill Recharge", F(1.0)), ("Summon Limit", F(5.0)),
        ]),
    ]),
];

/// Build the reference catalog.
pub fn catalog() -> Result<Catalog, CatalogError> {
    let mut builder = Catalog::builder();
    for (kind, attribute, value) in ANCHORS {
        let name = alloc::format!("Crossroads of {kind}");
        builder.push(
            ClusterSpec::new(name.clone(), 1)
                .grants(kind, 1)
                .anchor()
                .member(NodeSpec::main(name, 0).effect(attribute, value)),
        );
    }
    for Entry(name, tier, requires, grants, members) in CONSTELLATIONS {
        let mut spec = ClusterSpec::new(*name, *tier);
        for &(kind, amount) in *requires {
            spec = spec.requires(kind, amount);
        }
        for &(kind, amount) in *grants {
            spec = spec.grants(kind, amount);
        }
        for Member(star, rank, line, effects) in *members {
            let node = match line {
                Some(line) => NodeSpec::branch(*star, *rank, *line),
                None => NodeSpec::main(*star, *rank),
            };
            let node = effects
                .iter()
                .fold(node, |node, &(attribute, value)| node.effect(attribute, value));
            spec = spec.member(node);
        }
        builder.push(spec);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tier;

    #[test]
    fn test_reference_builds() {
        let c = catalog().unwrap();
        assert_eq!(c.clusters().len(), 109);
        assert_eq!(c.nodes().len(), 561);
        assert_eq!(c.anchors().len(), 5);
    }

    #[test]
    fn test_tier_counts() {
        let c = catalog().unwrap();
        let count = |t: Tier| c.clusters().iter().filter(|k| k.tier == t).count();
        assert_eq!(count(Tier::One), 50);
        assert_eq!(count(Tier::Two), 39);
        assert_eq!(count(Tier::Three), 20);
    }

    #[test]
    fn test_anchor_effects() {
        let c = catalog().unwrap();
        let chaos = c.resolve_node("Crossroads of Chaos").unwrap();
        let effects = &c.node(chaos).effects;
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].name, "Health");
        assert_eq!(effects[0].value, AttributeValue::Percent(5.0));
    }

    #[test]
    fn test_star_effects() {
        let c = catalog().unwrap();
        let effects = |name: &str| &c.node(c.resolve_node(name).unwrap()).effects;

        let first = effects("First Tortoise Star");
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "Health");
        assert_eq!(first[0].value, AttributeValue::Flat(25.0));
        assert_eq!(first[1].name, "Defensive Ability");
        assert_eq!(first[1].value, AttributeValue::Flat(12.0));

        let fourth = effects("Fourth Tortoise Star");
        assert_eq!(fourth[0].value, AttributeValue::Percent(4.0));

        // A span is stored as its midpoint.
        let wraith = effects("Fourth Wraith Star");
        assert_eq!(wraith[2].name, "Lightining Retaliation");
        assert_eq!(wraith[2].value, AttributeValue::Flat(35.5));

        let total: usize = c.nodes().iter().map(|n| n.effects.len()).sum();
        assert_eq!(total, 1551 + 5);
    }

    #[test]
    fn test_only_wraith_incompletable() {
        let c = catalog().unwrap();
        let stuck: Vec<_> = c.clusters().iter().filter(|k| !k.completable).collect();
        assert_eq!(stuck.len(), 1);
        assert_eq!(stuck[0].name, "Wraith");

        let dead: Vec<_> = c.nodes().iter().filter(|n| !n.reachable).map(|n| n.name.as_str()).collect();
        assert_eq!(dead, ["Third Wraith Star", "Fourth Wraith Star"]);
    }

    #[test]
    fn test_known_entries() {
        let c = catalog().unwrap();
        let crane = c.cluster(c.resolve_cluster("Crane").unwrap());
        assert_eq!(crane.member_count(), 5);
        assert_eq!(crane.grants(O), 5);
        assert_eq!(crane.requirement.amount(O), 1);

        let magi = c.resolve_node("Sixth Magi Star").unwrap();
        assert_eq!(c.node(magi).rank, 3);
        assert_eq!(c.node(magi).line, Some(3));

        let spear = c.cluster(c.resolve_cluster("Spear of The Heavens").unwrap());
        assert!(spear.bonus.is_empty());
        assert_eq!(spear.tier, Tier::Three);
    }
}
