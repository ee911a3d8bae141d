use crate::config::WINNING_SCORE;
use crate::entities::PlayerSlot;

use super::events::GameEvent;
use super::input::{Action, TickInput};
use super::{Game, MatchState};

impl Game {
    /// Runs one fixed simulation step against a single input snapshot.
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.tick_count += 1;

        for action in &input.actions {
            match *action {
                Action::Fire(slot) => self.handle_fire(slot, &mut events),
                Action::Reset => self.request_reset(&mut events),
                Action::Quit => {}
            }
        }
        self.update_tanks(input);
        self.update_projectiles(&mut events);
        events
    }

    fn request_reset(&mut self, events: &mut Vec<GameEvent>) {
        if self.state != MatchState::RoundOver {
            return;
        }
        self.reset_match();
        log::info!("match reset after {} ticks", self.tick_count);
        events.push(GameEvent::MatchReset);
    }

    /// Damages `target`; on elimination credits `by` and may decide the match.
    pub(super) fn apply_hit(
        &mut self,
        target: PlayerSlot,
        by: PlayerSlot,
        events: &mut Vec<GameEvent>,
    ) {
        let eliminated = self.tanks[target.index()].take_damage();
        let health = self.tanks[target.index()].health;
        log::debug!("{} hit {} ({health} left)", by.name(), target.name());
        events.push(GameEvent::Hit {
            target,
            by,
            health,
        });
        if !eliminated {
            return;
        }

        let shooter = &mut self.tanks[by.index()];
        shooter.score += 1;
        let score = shooter.score;
        log::info!("{} eliminated {} (score {score})", by.name(), target.name());
        events.push(GameEvent::Eliminated { target, by });

        if score >= WINNING_SCORE && self.winner.is_none() {
            self.winner = Some(by);
            self.state = MatchState::RoundOver;
            log::info!("{} wins the match", by.name());
            events.push(GameEvent::MatchWon { winner: by });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FIRE_COOLDOWN_TICKS, MAX_HEALTH, RESPAWN_TICKS};
    use crate::entities::Projectile;
    use crate::game::input::ControlState;
    use crate::math::{Rect, vec2};
    use crate::world::World;

    fn open_game() -> Game {
        Game::with_world(3, World::with_walls(960.0, 640.0, Vec::new()))
    }

    fn fire(slot: PlayerSlot) -> TickInput {
        TickInput::with_actions([Action::Fire(slot)])
    }

    fn reset() -> TickInput {
        TickInput::with_actions([Action::Reset])
    }

    /// Player one wins on the spot; the game is left in `RoundOver`.
    fn finish_match(game: &mut Game) {
        game.tank_mut(PlayerSlot::One).score = 4;
        game.tank_mut(PlayerSlot::Two).health = 1;
        game.apply_hit(PlayerSlot::Two, PlayerSlot::One, &mut Vec::new());
        game.tank_mut(PlayerSlot::One).pos = vec2(480.0, 120.0);
    }

    /// Puts player two a short way ahead of player one's muzzle.
    fn face_off(game: &mut Game) {
        game.tank_mut(PlayerSlot::One).pos = vec2(100.0, 100.0);
        game.tank_mut(PlayerSlot::Two).pos = vec2(200.0, 100.0);
    }

    fn shoot_until_hit(game: &mut Game) -> Vec<GameEvent> {
        let mut all = game.tick(&fire(PlayerSlot::One));
        while !game.projectiles().is_empty() {
            all.extend(game.tick(&TickInput::default()));
        }
        all
    }

    fn eliminate_two(game: &mut Game) -> Vec<GameEvent> {
        let mut all = Vec::new();
        for _ in 0..MAX_HEALTH {
            game.tank_mut(PlayerSlot::One).cooldown = 0;
            all.extend(shoot_until_hit(game));
        }
        all
    }

    #[test]
    fn shot_straight_ahead_hits_opponent() {
        let mut game = open_game();
        face_off(&mut game);
        let events = shoot_until_hit(&mut game);
        assert!(events.contains(&GameEvent::Fired { by: PlayerSlot::One }));
        assert!(events.contains(&GameEvent::Hit {
            target: PlayerSlot::Two,
            by: PlayerSlot::One,
            health: MAX_HEALTH - 1,
        }));
        assert_eq!(game.tank(PlayerSlot::Two).health, MAX_HEALTH - 1);
        assert_eq!(game.tank(PlayerSlot::One).score, 0);
    }

    #[test]
    fn elimination_scores_once_and_starts_respawn() {
        let mut game = open_game();
        face_off(&mut game);
        let events = eliminate_two(&mut game);
        let eliminations = events
            .iter()
            .filter(|event| matches!(event, GameEvent::Eliminated { .. }))
            .count();
        assert_eq!(eliminations, 1);
        assert_eq!(game.tank(PlayerSlot::One).score, 1);
        let two = game.tank(PlayerSlot::Two);
        assert_eq!(two.health, 0);
        assert!(two.is_respawning());
        assert!(two.respawn_timer <= RESPAWN_TICKS);
    }

    #[test]
    fn respawning_tank_is_not_hit() {
        let mut game = open_game();
        face_off(&mut game);
        eliminate_two(&mut game);
        let score = game.tank(PlayerSlot::One).score;
        game.tank_mut(PlayerSlot::One).cooldown = 0;
        let events = shoot_until_hit(&mut game);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Hit { .. })));
        assert_eq!(game.tank(PlayerSlot::One).score, score);
        assert_eq!(game.tank(PlayerSlot::Two).health, 0);
    }

    #[test]
    fn second_shot_inside_cooldown_is_ignored() {
        let mut game = open_game();
        game.tick(&fire(PlayerSlot::One));
        assert_eq!(game.projectiles().len(), 1);
        for _ in 1..FIRE_COOLDOWN_TICKS {
            game.tick(&fire(PlayerSlot::One));
        }
        assert_eq!(game.projectiles().len(), 1);
        assert_eq!(game.tank(PlayerSlot::One).cooldown, 0);
        game.tick(&fire(PlayerSlot::One));
        assert_eq!(game.projectiles().len(), 2);
    }

    #[test]
    fn projectile_never_hits_its_owner() {
        let mut game = open_game();
        game.tank_mut(PlayerSlot::One).pos = vec2(100.0, 100.0);
        game.projectiles
            .push(Projectile::new(vec2(92.0, 100.0), 0.0, PlayerSlot::One));
        let events = game.tick(&TickInput::default());
        assert!(events.is_empty());
        assert_eq!(game.tank(PlayerSlot::One).health, MAX_HEALTH);
        assert_eq!(game.projectiles().len(), 1);
    }

    #[test]
    fn overlapping_tanks_each_take_one_hit() {
        let mut game = open_game();
        game.tank_mut(PlayerSlot::One).pos = vec2(300.0, 300.0);
        game.tank_mut(PlayerSlot::Two).pos = vec2(300.0, 300.0);
        game.projectiles
            .push(Projectile::new(vec2(292.0, 300.0), 0.0, PlayerSlot::Two));
        game.projectiles
            .push(Projectile::new(vec2(292.0, 302.0), 0.0, PlayerSlot::One));
        let events = game.tick(&TickInput::default());
        let hits: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Hit { .. }))
            .collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(game.tank(PlayerSlot::One).health, MAX_HEALTH - 1);
        assert_eq!(game.tank(PlayerSlot::Two).health, MAX_HEALTH - 1);
        assert!(game.projectiles().is_empty());
    }

    #[test]
    fn fifth_elimination_wins_and_later_ones_do_not_steal_it() {
        let mut game = open_game();
        game.tank_mut(PlayerSlot::One).score = 4;
        game.tank_mut(PlayerSlot::Two).score = 4;
        game.tank_mut(PlayerSlot::Two).health = 1;
        game.apply_hit(PlayerSlot::Two, PlayerSlot::One, &mut Vec::new());
        assert_eq!(game.winner(), Some(PlayerSlot::One));
        assert_eq!(game.state(), MatchState::RoundOver);

        game.tank_mut(PlayerSlot::One).health = 1;
        let mut events = Vec::new();
        game.apply_hit(PlayerSlot::One, PlayerSlot::Two, &mut events);
        assert_eq!(game.tank(PlayerSlot::Two).score, 5);
        assert_eq!(game.winner(), Some(PlayerSlot::One));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::MatchWon { .. })));
    }

    #[test]
    fn reset_is_ignored_while_playing() {
        let mut game = open_game();
        game.tank_mut(PlayerSlot::Two).score = 3;
        let events = game.tick(&reset());
        assert!(events.is_empty());
        assert_eq!(game.tank(PlayerSlot::Two).score, 3);
        assert!(game.world().walls.is_empty());
    }

    #[test]
    fn reset_after_win_clears_the_match() {
        let mut game = open_game();
        finish_match(&mut game);
        game.tick(&fire(PlayerSlot::One));
        assert!(!game.projectiles().is_empty());

        let events = game.tick(&reset());
        assert!(events.contains(&GameEvent::MatchReset));
        assert_eq!(game.state(), MatchState::Playing);
        assert_eq!(game.winner(), None);
        assert!(game.projectiles().is_empty());
        for tank in game.tanks() {
            assert_eq!(tank.score, 0);
            assert_eq!(tank.respawn_timer, 0);
            assert_eq!(tank.health, MAX_HEALTH);
        }
        assert_eq!(game.world().walls.len(), 15);
    }

    #[test]
    fn shot_queued_after_reset_survives_it() {
        let mut game = open_game();
        finish_match(&mut game);
        let events = game.tick(&TickInput::with_actions([
            Action::Reset,
            Action::Fire(PlayerSlot::One),
        ]));
        assert_eq!(
            &events[..2],
            &[
                GameEvent::MatchReset,
                GameEvent::Fired { by: PlayerSlot::One }
            ]
        );
        assert_eq!(game.state(), MatchState::Playing);
        assert_eq!(
            game.tank(PlayerSlot::One).cooldown,
            FIRE_COOLDOWN_TICKS - 1
        );
    }

    #[test]
    fn shot_queued_before_reset_is_cleared() {
        let mut game = open_game();
        finish_match(&mut game);
        let events = game.tick(&TickInput::with_actions([
            Action::Fire(PlayerSlot::One),
            Action::Reset,
        ]));
        assert_eq!(
            &events[..2],
            &[
                GameEvent::Fired { by: PlayerSlot::One },
                GameEvent::MatchReset
            ]
        );
        assert!(game.projectiles().is_empty());
    }

    #[test]
    fn blocked_tank_keeps_position_but_turns() {
        let wall = Rect::new(121.0, 0.0, 10.0, 640.0);
        let mut game = Game::with_world(1, World::with_walls(960.0, 640.0, vec![wall]));
        game.tank_mut(PlayerSlot::One).pos = vec2(100.0, 100.0);
        let mut input = TickInput::default();
        input.controls[0] = ControlState {
            up: true,
            left: true,
            ..Default::default()
        };
        game.tick(&input);
        let tank = game.tank(PlayerSlot::One);
        assert_eq!(tank.pos, vec2(100.0, 100.0));
        assert!(tank.body_angle > 0.0);
    }
}
