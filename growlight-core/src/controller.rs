//! Controller context
//!
//! Bundles the profile store, schedule engine, last applied output and the
//! menu session into one value owned by the firmware's controller task.
//! Every input goes through [`Controller::handle`] and every periodic poll
//! through [`Controller::tick`]; both answer with a [`Response`] describing
//! the side effects the caller has to perform. The controller itself does
//! no I/O.

use crate::config::{Period, ProfileStore, Settings, UiConfig, MAX_PROFILES};
use crate::scheduler::{OutputState, ScheduleEngine};
use crate::state::{
    editor_first_row, EditField, InputEvent, Mode, PeriodCursor, Session, TopMenuAction, View,
};
use crate::storage::{self, CodecError};

/// Side effect the firmware performs outside the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// Encode the store and write it to flash
    Save,
    /// Read flash and hand the image to [`Controller::restore`]
    Reload,
    /// Reboot into the USB bootloader; never returns
    EnterBootloader,
}

/// Result of one tick or input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// Display content changed
    pub redraw: bool,
    /// Output to drive, if it has to be (re)applied
    pub apply: Option<OutputState>,
    /// Persistence or reboot request
    pub request: Option<Request>,
}

impl Response {
    /// Nothing to do
    pub const NONE: Self = Self {
        redraw: false,
        apply: None,
        request: None,
    };

    /// Redraw only
    pub const REDRAW: Self = Self {
        redraw: true,
        apply: None,
        request: None,
    };

    fn redraw_if(changed: bool) -> Self {
        Self {
            redraw: changed,
            ..Self::NONE
        }
    }
}

/// Result of restoring a stored image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RestoreOutcome {
    /// Store replaced with the stored profiles
    Loaded,
    /// No valid image; store untouched
    NoData,
}

/// Application context
#[derive(Debug, Clone)]
pub struct Controller {
    store: ProfileStore,
    engine: ScheduleEngine,
    output: Option<OutputState>,
    session: Session,
    ui: UiConfig,
}

impl Controller {
    /// Create a controller whose schedule starts at `now_ms`
    pub fn new(store: ProfileStore, settings: &Settings, now_ms: u64) -> Self {
        let selected = store.selected_index();
        Self {
            store,
            engine: ScheduleEngine::new(now_ms, settings.pump),
            output: None,
            session: Session::new(selected, now_ms),
            ui: settings.ui,
        }
    }

    /// Profile store
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Schedule engine
    pub fn engine(&self) -> &ScheduleEngine {
        &self.engine
    }

    /// Menu session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current menu mode
    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    /// Output last handed out for applying; `None` before the first tick
    pub fn output(&self) -> Option<&OutputState> {
        self.output.as_ref()
    }

    /// Periodic poll
    ///
    /// Falls back to the dashboard after the idle timeout. On the dashboard
    /// the schedule is recomputed and applied when it changed.
    pub fn tick(&mut self, now_ms: u64) -> Response {
        let mut response = Response::NONE;

        if self.session.mode != Mode::ShowState
            && self.session.is_idle(now_ms, self.ui.idle_timeout_ms)
        {
            self.session.return_home(self.store.selected_index());
            response.redraw = true;
        }

        if self.session.mode == Mode::ShowState {
            if let Some(output) = self.recompute(now_ms) {
                response.apply = Some(output);
                response.redraw = true;
            }
        }

        response
    }

    /// Encoder rotation by `delta` detents
    pub fn on_rotary(&mut self, delta: i32, now_ms: u64) -> Response {
        self.handle(InputEvent::Rotate(delta), now_ms)
    }

    /// Encoder button press
    pub fn on_click(&mut self, now_ms: u64) -> Response {
        self.handle(InputEvent::Click, now_ms)
    }

    /// Dispatch one input on the current mode
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) -> Response {
        use InputEvent::*;
        use Mode::*;

        if event == Rotate(0) {
            return Response::NONE;
        }
        self.session.last_input_ms = now_ms;

        match (self.session.mode, event) {
            (ShowState | ShowProfile, Rotate(delta)) => self.browse(delta),
            (ShowProfile, Click) => self.commit_browsed(now_ms),
            (ShowState, Click) => {
                self.session.period_cursor = PeriodCursor::BACK;
                self.session.mode = EditProfile;
                Response::REDRAW
            }

            (EditProfile, Rotate(delta)) => {
                let next = self.session.period_cursor.step(delta);
                let changed = next != self.session.period_cursor;
                self.session.period_cursor = next;
                Response::redraw_if(changed)
            }
            (EditProfile, Click) => self.open_period(),

            (EditPeriod, Rotate(delta)) => {
                let next = self.session.field.step(delta);
                let changed = next != self.session.field;
                self.session.field = next;
                Response::redraw_if(changed)
            }
            (EditPeriod, Click) => {
                self.session.mode = self.session.field.edit_mode().unwrap_or(EditProfile);
                Response::REDRAW
            }

            (EditDuration, Rotate(delta)) => {
                let step = self.ui.duration_step_minutes as i32;
                let changed = self
                    .edited_period_mut()
                    .map(|period| period.adjust_duration(delta.saturating_mul(step)))
                    .unwrap_or(false);
                Response::redraw_if(changed)
            }
            (EditWrLevel, Rotate(delta)) => self.dial_power(EditField::WhiteRed, delta),
            (EditBlLevel, Rotate(delta)) => self.dial_power(EditField::Blue, delta),
            (EditDuration | EditWrLevel | EditBlLevel, Click) => {
                self.session.mode = EditPeriod;
                Response::REDRAW
            }

            (TopMenu, Rotate(delta)) => {
                match self.session.action.step(delta) {
                    Some(action) => self.session.action = action,
                    None => {
                        self.session.menu_cursor = 0;
                        self.session.mode = self.session.browse_mode(self.store.selected_index());
                    }
                }
                Response::REDRAW
            }
            (TopMenu, Click) => self.run_action(),

            (TimeShift, Rotate(delta)) => {
                let limit = self.ui.max_shift_hours as i32;
                let next = (self.session.pending_shift_hours as i32)
                    .saturating_add(delta)
                    .clamp(-limit, limit);
                let changed = next != self.session.pending_shift_hours as i32;
                self.session.pending_shift_hours = next as i8;
                Response::redraw_if(changed)
            }
            (TimeShift, Click) => {
                self.session.mode = TopMenu;
                let mut response = Response::REDRAW;
                if self.session.pending_shift_hours != 0 {
                    self.engine.shift_hours(self.session.pending_shift_hours as i32);
                    response.apply = Some(self.force_recompute(now_ms));
                }
                response
            }
        }
    }

    /// Screen content for the current mode
    pub fn view(&self) -> View<'_> {
        let selected = self.store.selected_profile();
        match self.session.mode {
            Mode::ShowState => View::Dashboard {
                profile: selected,
                output: self.output.unwrap_or_default(),
            },
            Mode::ShowProfile => View::ProfileSummary {
                profile: self
                    .store
                    .profile(self.session.menu_cursor)
                    .unwrap_or(selected),
            },
            Mode::EditProfile => View::ProfileEditor {
                profile: selected,
                cursor: self.session.period_cursor,
                first_row: editor_first_row(self.session.period_cursor),
            },
            Mode::EditPeriod | Mode::EditDuration | Mode::EditWrLevel | Mode::EditBlLevel => {
                let index = self.session.period_cursor.selected_period().unwrap_or(0);
                View::PeriodEditor {
                    index,
                    period: &selected.periods()[index],
                    field: self.session.field,
                    editing: self.session.mode.is_value_edit(),
                }
            }
            Mode::TimeShift => View::TimeShift {
                hours: self.session.pending_shift_hours,
            },
            Mode::TopMenu => View::TopMenu {
                selected: self.session.action,
            },
        }
    }

    /// Write the persistence image of the store into `buf`
    pub fn encode_image(&self, buf: &mut [u8]) -> Result<usize, CodecError> {
        storage::encode(&self.store, buf)
    }

    /// Replace the store from a persistence image
    ///
    /// On success the menu returns to the dashboard of the restored
    /// selection. A missing marker leaves everything untouched.
    pub fn restore(&mut self, image: &[u8]) -> Result<RestoreOutcome, CodecError> {
        match storage::decode(image)? {
            Some(store) => {
                self.store = store;
                self.session.return_home(self.store.selected_index());
                Ok(RestoreOutcome::Loaded)
            }
            None => Ok(RestoreOutcome::NoData),
        }
    }

    fn browse(&mut self, delta: i32) -> Response {
        let next = (self.session.menu_cursor as i32).saturating_add(delta);
        if next < 0 {
            self.session.mode = Mode::TopMenu;
            self.session.action = TopMenuAction::Shift;
            return Response::REDRAW;
        }
        self.session.menu_cursor = if next >= MAX_PROFILES as i32 {
            0
        } else {
            next as usize
        };
        self.session.mode = self.session.browse_mode(self.store.selected_index());
        Response::REDRAW
    }

    fn commit_browsed(&mut self, now_ms: u64) -> Response {
        if self.session.menu_cursor == self.store.selected_index()
            || self.store.select(self.session.menu_cursor).is_err()
        {
            return Response::REDRAW;
        }
        self.session.mode = Mode::ShowState;
        Response {
            apply: Some(self.force_recompute(now_ms)),
            ..Response::REDRAW
        }
    }

    fn open_period(&mut self) -> Response {
        let Some(index) = self.session.period_cursor.selected_period() else {
            self.session.mode = Mode::ShowState;
            return Response::REDRAW;
        };
        self.session.mode = Mode::EditPeriod;
        self.session.field = EditField::Back;

        let period = self.store.selected_profile().periods()[index];
        let output = self.output.get_or_insert_with(OutputState::default);
        output.white_red_power = period.white_red_power();
        output.blue_power = period.blue_power();
        Response {
            apply: Some(*output),
            ..Response::REDRAW
        }
    }

    fn dial_power(&mut self, channel: EditField, delta: i32) -> Response {
        let step = (self.ui.power_step as i32).saturating_mul(delta);
        let Some(period) = self.edited_period_mut() else {
            return Response::NONE;
        };

        let (changed, level) = match channel {
            EditField::Blue => (period.adjust_blue(step), period.blue_power()),
            _ => (period.adjust_white_red(step), period.white_red_power()),
        };

        let output = self.output.get_or_insert_with(OutputState::default);
        match channel {
            EditField::Blue => output.blue_power = level,
            _ => output.white_red_power = level,
        }
        Response {
            redraw: changed,
            apply: Some(*output),
            request: None,
        }
    }

    fn run_action(&mut self) -> Response {
        let selected = self.store.selected_index();
        match self.session.action {
            TopMenuAction::Save => {
                self.session.return_home(selected);
                Response {
                    request: Some(Request::Save),
                    ..Response::REDRAW
                }
            }
            TopMenuAction::Reload => {
                self.session.return_home(selected);
                Response {
                    request: Some(Request::Reload),
                    ..Response::REDRAW
                }
            }
            TopMenuAction::Flash => Response {
                request: Some(Request::EnterBootloader),
                ..Response::NONE
            },
            TopMenuAction::Shift => {
                self.session.pending_shift_hours = 0;
                self.session.mode = Mode::TimeShift;
                Response::REDRAW
            }
        }
    }

    fn edited_period_mut(&mut self) -> Option<&mut Period> {
        let index = self.session.period_cursor.selected_period()?;
        self.store.selected_profile_mut().period_mut(index)
    }

    /// Recompute; returns the new output only when it changed
    fn recompute(&mut self, now_ms: u64) -> Option<OutputState> {
        let (output, changed) =
            self.engine
                .compute(now_ms, self.store.selected_profile(), self.output.as_ref());
        self.output = Some(output);
        changed.then_some(output)
    }

    /// Recompute and hand the result out regardless of change
    fn force_recompute(&mut self, now_ms: u64) -> OutputState {
        let (output, _) = self
            .engine
            .compute(now_ms, self.store.selected_profile(), None);
        self.output = Some(output);
        output
    }
}
