//! Player controller: input to intent, status table, cooldowns, leveling.
//!
//! Everything here is plain data manipulation so it can be driven both by
//! the ECS systems and directly from tests. Scene side effects go through
//! the [`PlayerActions`] capability the caller hands in.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{Facing, Intent, Mode, Player, PlayerStatus};
use crate::combat::{SpellCatalog, WeaponCatalog};
use crate::core::{PlayerTuning, StatBlock, TimedFlag};

/// Scene capabilities the player may invoke.
pub trait PlayerActions {
    /// Build the weapon hitbox for the current weapon and facing.
    fn create_attack(&mut self);
    /// Remove the weapon hitbox, if any.
    fn destroy_attack(&mut self);
    /// Cast spell `spell` with the given total strength and energy cost.
    fn create_magic(&mut self, spell: usize, strength: i32, cost: i32);
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        let stats = tuning.stats;
        Self {
            stats,
            health: stats.health,
            energy: stats.energy,
            exp: 0,
            exp_needed: tuning.initial_exp_needed,
            level: 1,
            weapon: tuning.starting_weapon,
            spell: tuning.starting_spell,
            status: PlayerStatus::default(),
            attack: TimedFlag::new(tuning.attack_lock()),
            invulnerability: TimedFlag::new(tuning.invulnerability()),
            weapon_switch: TimedFlag::new(tuning.switch_delay()),
            spell_switch: TimedFlag::new(tuning.switch_delay()),
        }
    }

    /// Turn this tick's keys into a direction, a status and actions.
    ///
    /// Ignored entirely while an attack or cast is in progress. Each axis
    /// resolves on its own; the last axis pressed decides the facing.
    pub fn read_input(
        &mut self,
        intent: &Intent,
        direction: &mut Vec2,
        now: Duration,
        weapons: &WeaponCatalog,
        spells: &SpellCatalog,
        actions: &mut impl PlayerActions,
    ) {
        if self.is_attacking() {
            return;
        }

        if intent.up {
            direction.y = -1.0;
            self.status = PlayerStatus::new(Facing::Up, Mode::Moving);
        } else if intent.down {
            direction.y = 1.0;
            self.status = PlayerStatus::new(Facing::Down, Mode::Moving);
        } else {
            direction.y = 0.0;
        }

        if intent.left {
            direction.x = -1.0;
            self.status = PlayerStatus::new(Facing::Left, Mode::Moving);
        } else if intent.right {
            direction.x = 1.0;
            self.status = PlayerStatus::new(Facing::Right, Mode::Moving);
        } else {
            direction.x = 0.0;
        }

        if intent.attack {
            self.attack.raise(now);
            actions.create_attack();
        }

        if intent.cast {
            if let Some(spell) = spells.get(self.spell) {
                self.attack.raise(now);
                actions.create_magic(
                    self.spell % spells.len(),
                    spell.strength + self.stats.magic,
                    spell.cost,
                );
            }
        }

        if intent.next_spell && !self.spell_switch.is_raised() && !spells.is_empty() {
            self.spell_switch.raise(now);
            self.spell = (self.spell + 1) % spells.len();
        }

        if intent.next_weapon && !self.weapon_switch.is_raised() && !weapons.is_empty() {
            self.weapon_switch.raise(now);
            self.weapon = (self.weapon + 1) % weapons.len();
        }
    }

    /// Expire timed flags. Ending an attack removes its hitbox.
    pub fn tick_cooldowns(&mut self, now: Duration, actions: &mut impl PlayerActions) {
        if self.attack.poll(now) {
            actions.destroy_attack();
        }
        self.invulnerability.poll(now);
        self.weapon_switch.poll(now);
        self.spell_switch.poll(now);
    }

    /// Apply the status transition table for this tick.
    pub fn update_status(&mut self, direction: &mut Vec2) {
        if *direction == Vec2::ZERO && self.status.mode == Mode::Moving {
            self.status.mode = Mode::Idle;
        }

        if self.is_attacking() {
            *direction = Vec2::ZERO;
            self.status.mode = Mode::Attack;
        } else if self.status.mode == Mode::Attack {
            self.status.mode = Mode::Moving;
        }
    }

    /// Level up for as long as the banked experience covers the requirement.
    ///
    /// Returns the number of levels gained.
    pub fn level_up(&mut self, growth: &StatBlock) -> u32 {
        let mut gained = 0;
        while self.exp >= self.exp_needed {
            self.exp -= self.exp_needed;
            self.level += 1;
            self.exp_needed = self.exp_needed * 11 / 10 + 50;

            self.stats.health += growth.health;
            self.stats.energy += growth.energy;
            self.stats.attack += growth.attack;
            self.stats.magic += growth.magic;
            self.stats.speed += growth.speed;

            self.health = self.stats.health;
            self.energy = self.stats.energy;
            gained += 1;
        }
        gained
    }

    /// Take a hit unless invulnerable. Returns whether damage landed.
    pub fn take_damage(&mut self, amount: i32, now: Duration) -> bool {
        if !self.is_vulnerable() {
            return false;
        }
        self.suffer(amount, now);
        true
    }

    /// Apply a hit and (re)start the invulnerability window. Callers decide
    /// vulnerability themselves.
    pub fn suffer(&mut self, amount: i32, now: Duration) {
        self.health -= amount;
        self.invulnerability.raise(now);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Attack stat plus the current weapon's damage.
    pub fn weapon_damage(&self, weapons: &WeaponCatalog) -> i32 {
        self.stats.attack + weapons.get(self.weapon).map_or(0, |w| w.damage)
    }

    /// Magic stat plus the current spell's strength.
    pub fn magic_damage(&self, spells: &SpellCatalog) -> i32 {
        self.stats.magic + spells.get(self.spell).map_or(0, |s| s.strength)
    }

    /// Spend `cost` energy if there is enough of it.
    pub fn try_spend_energy(&mut self, cost: i32) -> bool {
        if self.energy < cost {
            return false;
        }
        self.energy -= cost;
        true
    }

    /// Restore health, capped at the health maximum.
    pub fn restore_health(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.stats.health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::millis;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    enum Call {
        CreateAttack,
        DestroyAttack,
        CreateMagic(usize, i32, i32),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl PlayerActions for Recorder {
        fn create_attack(&mut self) {
            self.0.push(Call::CreateAttack);
        }

        fn destroy_attack(&mut self) {
            self.0.push(Call::DestroyAttack);
        }

        fn create_magic(&mut self, spell: usize, strength: i32, cost: i32) {
            self.0.push(Call::CreateMagic(spell, strength, cost));
        }
    }

    fn player() -> Player {
        Player::new(&PlayerTuning::default())
    }

    fn growth() -> StatBlock {
        PlayerTuning::default().level_up
    }

    #[test]
    fn exact_threshold_levels_once() {
        let mut p = player();
        p.exp = 100;

        assert_eq!(p.level_up(&growth()), 1);
        assert_eq!(p.level, 2);
        assert_eq!(p.exp, 0);
        assert_eq!(p.exp_needed, 160);
        assert_eq!(p.level_up(&growth()), 0);
    }

    #[test]
    fn overflow_levels_repeatedly() {
        let mut p = player();
        // 100, then 160, then 226: 486 covers exactly three levels
        p.exp = 500;

        assert_eq!(p.level_up(&growth()), 3);
        assert_eq!(p.level, 4);
        assert_eq!(p.exp, 14);
        assert_eq!(p.exp_needed, 298);
        assert_eq!(p.stats.health, 130);
        assert_eq!(p.stats.energy, 75);
        assert_eq!(p.stats.attack, 16);
        assert_eq!(p.stats.magic, 7);
        assert_eq!(p.health, 130);
        assert_eq!(p.energy, 75);
    }

    #[test]
    fn level_up_restores_health_and_energy() {
        let mut p = player();
        p.health = 3;
        p.energy = 0;
        p.exp = 120;
        p.level_up(&growth());
        assert_eq!(p.health, p.stats.health);
        assert_eq!(p.energy, p.stats.energy);
    }

    #[rstest]
    #[case(Mode::Moving, Vec2::ZERO, false, Mode::Idle)]
    #[case(Mode::Moving, Vec2::X, false, Mode::Moving)]
    #[case(Mode::Idle, Vec2::ZERO, false, Mode::Idle)]
    #[case(Mode::Idle, Vec2::ZERO, true, Mode::Attack)]
    #[case(Mode::Moving, Vec2::Y, true, Mode::Attack)]
    #[case(Mode::Attack, Vec2::ZERO, true, Mode::Attack)]
    #[case(Mode::Attack, Vec2::ZERO, false, Mode::Moving)]
    fn status_table(
        #[case] from: Mode,
        #[case] direction: Vec2,
        #[case] attacking: bool,
        #[case] to: Mode,
    ) {
        let mut p = player();
        p.status = PlayerStatus::new(Facing::Left, from);
        if attacking {
            p.attack.raise(Duration::ZERO);
        }
        let mut direction = direction;

        p.update_status(&mut direction);

        assert_eq!(p.status, PlayerStatus::new(Facing::Left, to));
        if attacking {
            assert_eq!(direction, Vec2::ZERO);
        }
    }

    #[test]
    fn diagonal_input_sets_both_axes() {
        let mut p = player();
        let mut direction = Vec2::ZERO;
        let intent = Intent {
            up: true,
            right: true,
            ..default()
        };

        p.read_input(
            &intent,
            &mut direction,
            Duration::ZERO,
            &WeaponCatalog::default(),
            &SpellCatalog::default(),
            &mut Recorder::default(),
        );

        assert_eq!(direction, Vec2::new(1.0, -1.0));
        assert_eq!(p.status, PlayerStatus::new(Facing::Right, Mode::Moving));
    }

    #[test]
    fn attack_locks_input_until_cooldown() {
        let mut p = player();
        let mut actions = Recorder::default();
        let weapons = WeaponCatalog::default();
        let spells = SpellCatalog::default();
        let mut direction = Vec2::ZERO;

        let swing = Intent {
            attack: true,
            ..default()
        };
        p.read_input(&swing, &mut direction, millis(1000), &weapons, &spells, &mut actions);
        assert!(p.is_attacking());

        // Second press while locked does nothing
        let walk = Intent {
            left: true,
            attack: true,
            ..default()
        };
        p.read_input(&walk, &mut direction, millis(1100), &weapons, &spells, &mut actions);
        assert_eq!(direction, Vec2::ZERO);

        p.tick_cooldowns(millis(1399), &mut actions);
        assert!(p.is_attacking());
        p.tick_cooldowns(millis(1400), &mut actions);
        assert!(!p.is_attacking());

        assert_eq!(actions.0, vec![Call::CreateAttack, Call::DestroyAttack]);
    }

    #[test]
    fn cast_passes_total_strength_and_cost() {
        let mut p = player();
        let mut actions = Recorder::default();
        let intent = Intent {
            cast: true,
            ..default()
        };

        p.read_input(
            &intent,
            &mut Vec2::ZERO,
            Duration::ZERO,
            &WeaponCatalog::default(),
            &SpellCatalog::default(),
            &mut actions,
        );

        assert!(p.is_attacking());
        assert_eq!(actions.0, vec![Call::CreateMagic(0, 9, 20)]);
    }

    #[test]
    fn swing_and_cast_fire_together() {
        let mut p = player();
        let mut actions = Recorder::default();
        let intent = Intent {
            attack: true,
            cast: true,
            ..default()
        };

        p.read_input(
            &intent,
            &mut Vec2::ZERO,
            Duration::ZERO,
            &WeaponCatalog::default(),
            &SpellCatalog::default(),
            &mut actions,
        );

        assert!(p.is_attacking());
        assert_eq!(actions.0, vec![Call::CreateAttack, Call::CreateMagic(0, 9, 20)]);
    }

    #[test]
    fn switching_wraps_and_debounces() {
        let mut p = player();
        let weapons = WeaponCatalog::default();
        let spells = SpellCatalog::default();
        let mut actions = Recorder::default();
        let intent = Intent {
            next_weapon: true,
            next_spell: true,
            ..default()
        };
        assert_eq!(p.weapon, 1);

        p.read_input(&intent, &mut Vec2::ZERO, millis(0), &weapons, &spells, &mut actions);
        assert_eq!((p.weapon, p.spell), (0, 1));

        // Held key inside the debounce window is ignored
        p.tick_cooldowns(millis(100), &mut actions);
        p.read_input(&intent, &mut Vec2::ZERO, millis(100), &weapons, &spells, &mut actions);
        assert_eq!((p.weapon, p.spell), (0, 1));

        p.tick_cooldowns(millis(200), &mut actions);
        p.read_input(&intent, &mut Vec2::ZERO, millis(200), &weapons, &spells, &mut actions);
        assert_eq!((p.weapon, p.spell), (1, 0));
    }

    #[test]
    fn damage_respects_invulnerability_window() {
        let mut p = player();
        let mut actions = Recorder::default();

        assert!(p.take_damage(10, millis(0)));
        assert!(!p.take_damage(10, millis(100)));
        assert_eq!(p.health, 90);

        p.tick_cooldowns(millis(500), &mut actions);
        assert!(p.take_damage(10, millis(500)));
        assert_eq!(p.health, 80);
    }

    #[test]
    fn heal_caps_at_maximum() {
        let mut p = player();
        p.health = 95;
        assert!(p.try_spend_energy(10));
        p.restore_health(24);
        assert_eq!(p.health, 100);
        assert_eq!(p.energy, 50);

        p.energy = 5;
        assert!(!p.try_spend_energy(10));
        assert_eq!(p.energy, 5);
    }

    #[test]
    fn damage_totals_use_current_selection() {
        let p = player();
        assert_eq!(p.weapon_damage(&WeaponCatalog::default()), 20);
        assert_eq!(p.magic_damage(&SpellCatalog::default()), 9);
    }
}
