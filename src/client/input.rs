use ggez::input::keyboard::KeyCode;

/// A discrete key event, as delivered by the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(KeyCode),
    Released(KeyCode),
}

/// What the player controller may ask of the input system.
pub trait InputSource {
    fn is_held(&self, key: KeyCode) -> bool;
    /// Starts the repeat trigger for a held aiming key.
    fn arm_repeat(&mut self);
    /// Consumes the trigger for the current tick.
    fn repeat_fired(&mut self) -> bool;
}

#[derive(Debug)]
pub struct InputState {
    rotating_left: bool,
    rotating_right: bool,
    repeat_armed: bool,
    repeat_interval: u32,
    repeat_ticks: u32,
    repeat_pending: bool,
}

impl InputState {
    pub fn new(repeat_interval: u32) -> Self {
        Self {
            rotating_left: false,
            rotating_right: false,
            repeat_armed: false,
            repeat_interval: repeat_interval.max(1),
            repeat_ticks: 0,
            repeat_pending: false,
        }
    }

    pub fn repeat_armed(&self) -> bool {
        self.repeat_armed
    }

    /// Advances the repeat cadence by one simulation tick.
    pub fn update(&mut self) {
        if !self.repeat_armed {
            return;
        }

        self.repeat_ticks += 1;
        if self.repeat_ticks >= self.repeat_interval {
            self.repeat_ticks = 0;
            self.repeat_pending = true;
        }
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        match key {
            KeyCode::ArrowLeft => self.rotating_left = true,
            KeyCode::ArrowRight => self.rotating_right = true,
            _ => {}
        }
    }

    pub fn process_key_up(&mut self, key: KeyCode) {
        match key {
            KeyCode::ArrowLeft => self.rotating_left = false,
            KeyCode::ArrowRight => self.rotating_right = false,
            _ => return,
        }

        if !self.rotating_left && !self.rotating_right {
            self.disarm();
        }
    }

    /// Drops any held-key state, e.g. when a flight locks aiming.
    pub fn release_all(&mut self) {
        self.rotating_left = false;
        self.rotating_right = false;
        self.disarm();
    }

    fn disarm(&mut self) {
        self.repeat_armed = false;
        self.repeat_ticks = 0;
        self.repeat_pending = false;
    }
}

impl InputSource for InputState {
    fn is_held(&self, key: KeyCode) -> bool {
        match key {
            KeyCode::ArrowLeft => self.rotating_left,
            KeyCode::ArrowRight => self.rotating_right,
            _ => false,
        }
    }

    fn arm_repeat(&mut self) {
        if !self.repeat_armed {
            self.repeat_armed = true;
            self.repeat_ticks = 0;
            self.repeat_pending = false;
        }
    }

    fn repeat_fired(&mut self) -> bool {
        std::mem::take(&mut self.repeat_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held_left() -> InputState {
        let mut input = InputState::new(3);
        input.process_key_down(KeyCode::ArrowLeft);
        input.arm_repeat();
        input
    }

    #[test]
    fn fires_on_cadence_while_held() {
        let mut input = held_left();
        let mut fired = vec![];
        for _ in 0..9 {
            input.update();
            fired.push(input.repeat_fired());
        }
        assert_eq!(
            fired,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn unarmed_never_fires() {
        let mut input = InputState::new(1);
        input.process_key_down(KeyCode::ArrowRight);
        for _ in 0..5 {
            input.update();
            assert!(!input.repeat_fired());
        }
    }

    #[test]
    fn release_disarms() {
        let mut input = held_left();
        input.update();
        input.update();
        input.process_key_up(KeyCode::ArrowLeft);
        assert!(!input.repeat_armed());
        input.update();
        assert!(!input.repeat_fired());
        assert!(!input.is_held(KeyCode::ArrowLeft));
    }

    #[test]
    fn stays_armed_while_other_side_held() {
        let mut input = held_left();
        input.process_key_down(KeyCode::ArrowRight);
        input.process_key_up(KeyCode::ArrowLeft);
        assert!(input.repeat_armed());
        assert!(input.is_held(KeyCode::ArrowRight));
    }

    #[test]
    fn rearming_keeps_cadence() {
        let mut input = held_left();
        input.update();
        input.update();
        input.arm_repeat();
        input.update();
        assert!(input.repeat_fired());
    }

    #[test]
    fn unrelated_keys_ignored() {
        let mut input = held_left();
        input.process_key_up(KeyCode::Space);
        assert!(input.repeat_armed());
        assert!(!input.is_held(KeyCode::Space));
    }
}
