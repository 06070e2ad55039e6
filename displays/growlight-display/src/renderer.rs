//! Screen rendering
//!
//! Lays out each menu view as text on the 8x21 screen. Two-row slots keep
//! the layout close to the large-font screens of the first hardware
//! revision: the profile editor shows the back row and three periods.

use heapless::String;

use growlight_core::config::{Period, Profile, MAX_PERIODS};
use growlight_core::scheduler::OutputState;
use growlight_core::state::{EditField, Notice, PeriodCursor, TopMenuAction, View, EDITOR_VISIBLE_PERIODS};

use crate::screen::{Screen, SCREEN_COLS};

type Line = String<SCREEN_COLS>;

/// Column of the power figures in the profile editor
const EDITOR_POWER_COL: usize = 12;

/// Screen renderer for the menu views
pub struct Renderer {
    screen: Screen,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render a view of the menu
    pub fn render(&mut self, view: &View<'_>) {
        self.screen.clear();
        match *view {
            View::Dashboard { profile, output } => self.render_dashboard(profile, &output),
            View::ProfileSummary { profile } => self.render_summary(profile),
            View::ProfileEditor {
                profile,
                cursor,
                first_row,
            } => self.render_profile_editor(profile, cursor, first_row),
            View::PeriodEditor {
                index,
                period,
                field,
                editing,
            } => self.render_period_editor(index, period, field, editing),
            View::TimeShift { hours } => self.render_time_shift(hours),
            View::TopMenu { selected } => self.render_top_menu(selected),
        }
    }

    /// Render a full-screen notice
    pub fn render_notice(&mut self, notice: Notice) {
        self.screen.clear();
        self.screen.set_line(3, notice.text());
    }

    fn render_dashboard(&mut self, profile: &Profile, output: &OutputState) {
        self.screen.set_line(0, profile.name().as_str());
        self.screen.set_highlight(0);

        let mut line = Line::new();
        let hours = output.period_minutes_left / 60;
        let minutes = output.period_minutes_left % 60;
        let _ = write_to_string(
            &mut line,
            format_args!("#{} {}:{:02}", output.active_period_index + 1, hours, minutes),
        );
        self.screen.set_line(2, &line);

        line.clear();
        let _ = write_to_string(
            &mut line,
            format_args!("W/R:{}% B:{}%", output.white_red_power, output.blue_power),
        );
        self.screen.set_line(4, &line);

        line.clear();
        let pump = if output.pump_on { "ON" } else { "OFF" };
        let _ = write_to_string(
            &mut line,
            format_args!("P:{} {}m", pump, output.pump_minutes_left),
        );
        self.screen.set_line(6, &line);
    }

    fn render_summary(&mut self, profile: &Profile) {
        self.screen.set_line(0, profile.name().as_str());
        self.screen.set_highlight(0);

        for (i, period) in profile.periods().iter().enumerate() {
            let mut line = Line::new();
            let _ = write_to_string(
                &mut line,
                format_args!(
                    "{}-T:{:2}|W:{:3}|B:{:3}",
                    i + 1,
                    period.duration_minutes() / 60,
                    period.white_red_power(),
                    period.blue_power()
                ),
            );
            self.screen.set_line(i + 1, &line);
        }
    }

    fn render_profile_editor(&mut self, profile: &Profile, cursor: PeriodCursor, first_row: usize) {
        self.screen.set_line(0, if cursor == PeriodCursor::BACK { ">BACK" } else { " BACK" });
        if cursor == PeriodCursor::BACK {
            self.screen.set_highlight(0);
        }

        let last = (first_row + EDITOR_VISIBLE_PERIODS).min(MAX_PERIODS);
        for (slot, index) in (first_row..last).enumerate() {
            let period = &profile.periods()[index];
            let row = 1 + slot * 2;
            let selected = cursor.selected_period() == Some(index);

            let mut line = Line::new();
            let _ = write_to_string(
                &mut line,
                format_args!(
                    "{}{}-T:{:2}",
                    if selected { '>' } else { ' ' },
                    index + 1,
                    period.duration_minutes() / 60
                ),
            );
            pad_to(&mut line, EDITOR_POWER_COL);
            let _ = write_to_string(&mut line, format_args!("W:{:3}%", period.white_red_power()));
            self.screen.set_line(row, &line);

            line.clear();
            pad_to(&mut line, EDITOR_POWER_COL);
            let _ = write_to_string(&mut line, format_args!("B:{:3}%", period.blue_power()));
            self.screen.set_line(row + 1, &line);

            if selected {
                self.screen.set_highlight(row);
            }
        }
    }

    fn render_period_editor(&mut self, index: usize, period: &Period, field: EditField, editing: bool) {
        for (slot, entry) in EditField::ALL.iter().enumerate() {
            let marker = match (*entry == field, editing) {
                (true, true) => '=',
                (true, false) => '>',
                (false, _) => ' ',
            };

            let mut line = Line::new();
            let _ = match entry {
                EditField::Back => {
                    write_to_string(&mut line, format_args!("{}BACK       PERIOD {}", marker, index + 1))
                }
                EditField::Duration => write_to_string(
                    &mut line,
                    format_args!("{}TIME:{}", marker, period.duration_minutes() / 60),
                ),
                EditField::WhiteRed => write_to_string(
                    &mut line,
                    format_args!("{}WRED:{:3}%", marker, period.white_red_power()),
                ),
                EditField::Blue => write_to_string(
                    &mut line,
                    format_args!("{}BLUE:{:3}%", marker, period.blue_power()),
                ),
            };

            let row = slot * 2;
            self.screen.set_line(row, &line);
            if *entry == field {
                self.screen.set_highlight(row);
            }
        }
    }

    fn render_time_shift(&mut self, hours: i8) {
        self.screen.set_line(1, "SHIFT HOURS:");

        let mut line = Line::new();
        let _ = write_to_string(&mut line, format_args!("       {:+}", hours));
        self.screen.set_line(4, &line);
    }

    fn render_top_menu(&mut self, selected: TopMenuAction) {
        for (slot, action) in TopMenuAction::ALL.iter().enumerate() {
            let mut line = Line::new();
            let marker = if *action == selected { '>' } else { ' ' };
            let _ = write_to_string(&mut line, format_args!("{}{}", marker, action.label()));

            let row = slot * 2;
            self.screen.set_line(row, &line);
            if *action == selected {
                self.screen.set_highlight(row);
            }
        }
    }
}

/// Append spaces up to column `col`
fn pad_to(line: &mut Line, col: usize) {
    while line.len() < col {
        if line.push(' ').is_err() {
            break;
        }
    }
}

/// Helper to write formatted text to a heapless String
fn write_to_string(s: &mut Line, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use growlight_core::config::{ProfileStore, FACTORY_PROFILES};
    use growlight_core::state::editor_first_row;
    use growlight_core::{Controller, config::Settings};

    fn veg() -> &'static Profile {
        &FACTORY_PROFILES[0]
    }

    #[test]
    fn test_render_dashboard() {
        let output = OutputState {
            active_period_index: 0,
            white_red_power: 100,
            blue_power: 100,
            pump_on: true,
            pump_minutes_left: 5,
            period_minutes_left: 840,
        };
        let mut renderer = Renderer::new();
        renderer.render(&View::Dashboard {
            profile: veg(),
            output,
        });

        let screen = renderer.screen();
        assert_eq!(screen.line(0), "VEG");
        assert_eq!(screen.line(2), "#1 14:00");
        assert_eq!(screen.line(4), "W/R:100% B:100%");
        assert_eq!(screen.line(6), "P:ON 5m");
        assert_eq!(screen.highlight(), Some(0));
    }

    #[test]
    fn test_render_dashboard_pump_off() {
        let output = OutputState {
            active_period_index: 1,
            period_minutes_left: 65,
            pump_minutes_left: 12,
            ..OutputState::default()
        };
        let mut renderer = Renderer::new();
        renderer.render(&View::Dashboard {
            profile: veg(),
            output,
        });
        assert_eq!(renderer.screen().line(2), "#2 1:05");
        assert_eq!(renderer.screen().line(4), "W/R:0% B:0%");
        assert_eq!(renderer.screen().line(6), "P:OFF 12m");
    }

    #[test]
    fn test_render_summary() {
        let mut renderer = Renderer::new();
        renderer.render(&View::ProfileSummary {
            profile: &FACTORY_PROFILES[1],
        });

        let screen = renderer.screen();
        assert_eq!(screen.line(0), "FLOWER");
        assert_eq!(screen.line(1), "1-T:12|W:100|B:  0");
        assert_eq!(screen.line(2), "2-T:12|W:  0|B:  0");
        assert_eq!(screen.line(6), "6-T: 0|W:  0|B:  0");
    }

    #[test]
    fn test_render_profile_editor_back_row() {
        let mut renderer = Renderer::new();
        renderer.render(&View::ProfileEditor {
            profile: veg(),
            cursor: PeriodCursor::BACK,
            first_row: 0,
        });

        let screen = renderer.screen();
        assert_eq!(screen.line(0), ">BACK");
        assert_eq!(screen.line(1), " 1-T:14     W:100%");
        assert_eq!(screen.line(2), "            B:100%");
        assert_eq!(screen.line(3), " 2-T:10     W:  0%");
        assert_eq!(screen.line(5), " 3-T: 0     W:  0%");
        assert_eq!(screen.line(7), "");
        assert_eq!(screen.highlight(), Some(0));
    }

    #[test]
    fn test_render_profile_editor_scrolls() {
        let cursor = PeriodCursor::period(4).unwrap();
        let mut renderer = Renderer::new();
        renderer.render(&View::ProfileEditor {
            profile: veg(),
            cursor,
            first_row: editor_first_row(cursor),
        });

        let screen = renderer.screen();
        assert_eq!(screen.line(0), " BACK");
        assert!(screen.line(1).starts_with(" 3-T"));
        assert!(screen.line(5).starts_with(">5-T"));
        assert_eq!(screen.highlight(), Some(5));
    }

    #[test]
    fn test_render_period_editor_markers() {
        let period = Period::new(840, 100, 35).unwrap();
        let mut renderer = Renderer::new();
        renderer.render(&View::PeriodEditor {
            index: 0,
            period: &period,
            field: EditField::Blue,
            editing: false,
        });
        let screen = renderer.screen();
        assert_eq!(screen.line(0), " BACK       PERIOD 1");
        assert_eq!(screen.line(2), " TIME:14");
        assert_eq!(screen.line(4), " WRED:100%");
        assert_eq!(screen.line(6), ">BLUE: 35%");
        assert_eq!(screen.highlight(), Some(6));

        renderer.render(&View::PeriodEditor {
            index: 0,
            period: &period,
            field: EditField::Duration,
            editing: true,
        });
        assert_eq!(renderer.screen().line(2), "=TIME:14");
        assert_eq!(renderer.screen().line(6), " BLUE: 35%");
    }

    #[test]
    fn test_render_time_shift() {
        let mut renderer = Renderer::new();
        renderer.render(&View::TimeShift { hours: 0 });
        assert_eq!(renderer.screen().line(1), "SHIFT HOURS:");
        assert_eq!(renderer.screen().line(4).trim(), "+0");

        renderer.render(&View::TimeShift { hours: -5 });
        assert_eq!(renderer.screen().line(4).trim(), "-5");
    }

    #[test]
    fn test_render_top_menu() {
        let mut renderer = Renderer::new();
        renderer.render(&View::TopMenu {
            selected: TopMenuAction::Reload,
        });
        let screen = renderer.screen();
        assert_eq!(screen.line(0), " TIME SHIFT");
        assert_eq!(screen.line(2), " SAVE");
        assert_eq!(screen.line(4), ">RELOAD");
        assert_eq!(screen.line(6), " FLASH");
        assert_eq!(screen.highlight(), Some(4));
    }

    #[test]
    fn test_render_notice_replaces_view() {
        let mut renderer = Renderer::new();
        renderer.render(&View::TopMenu {
            selected: TopMenuAction::Save,
        });
        renderer.render_notice(Notice::Saved);
        let screen = renderer.screen();
        assert_eq!(screen.line(3), "SAVED...");
        assert_eq!(screen.line(2), "");
        assert_eq!(screen.highlight(), None);
    }

    #[test]
    fn test_render_controller_views() {
        let mut controller = Controller::new(ProfileStore::factory(), &Settings::DEFAULT, 0);
        controller.tick(0);
        let mut renderer = Renderer::new();

        renderer.render(&controller.view());
        assert_eq!(renderer.screen().line(0), "VEG");
        assert_eq!(renderer.screen().line(6), "P:ON 5m");

        controller.on_rotary(1, 0);
        renderer.render(&controller.view());
        assert_eq!(renderer.screen().line(0), "FLOWER");

        controller.on_rotary(-2, 0);
        renderer.render(&controller.view());
        assert_eq!(renderer.screen().line(0), ">TIME SHIFT");
    }
}
