use chrono::NaiveDate;
use egui::Id;

use crate::model::{MonthWindow, ScrollJump, ViewMode, ViewState, WeekWindow};
use crate::ui;
use crate::ui::gesture::{self, PanTracker, Swipe};
use crate::ui::header::HeaderAction;
use crate::ui::month_view::MONTH_OFFSET_ID;
use crate::ui::week_view::WEEK_OFFSET_ID;

/// Scroll correction queued by a window mutation, applied on the next frame
/// once the mutated window has been committed.
#[derive(Debug, Clone, Copy)]
enum PendingScroll {
    /// Snap the strip back to rest, masking an inserted/replaced page.
    Reset,
    /// Start the strip offset at this value and let it settle to zero.
    SlideFrom(f32),
    /// Shift the released drag offset by one page width so the page change
    /// continues the drag instead of jumping.
    Rebase(f32),
}

/// Main application state.
pub struct CalendarApp {
    pub months: MonthWindow,
    pub view: ViewState,
    pub tracker: PanTracker,

    /// Backing date for the header's jump-to-month picker.
    pub jump_date: NaiveDate,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,

    pending_scroll: Option<PendingScroll>,
    page_width: f32,
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let today = chrono::Local::now().date_naive();
        log::info!("starting calendar on {}", today);

        Self {
            months: MonthWindow::new(today),
            view: ViewState::new(),
            tracker: PanTracker::new(),
            jump_date: today,
            show_about: false,
            status_message: "Ready".to_string(),
            pending_scroll: None,
            page_width: 0.0,
        }
    }

    fn active_offset_id(&self) -> Id {
        match self.view.mode {
            ViewMode::Month => Id::new(MONTH_OFFSET_ID),
            ViewMode::Week => Id::new(WEEK_OFFSET_ID),
        }
    }

    fn queue(&mut self, pending: PendingScroll) {
        self.pending_scroll = Some(pending);
    }

    // --- View-mode transitions ---

    pub fn enter_week_view(&mut self) {
        if self.view.mode == ViewMode::Week {
            return;
        }
        self.view.switch_to_week();
        self.queue(PendingScroll::Reset);
        self.status_message = format!("Week of {}", self.week_label());
    }

    pub fn enter_month_view(&mut self) {
        if self.view.mode == ViewMode::Month {
            return;
        }
        self.view.switch_to_month(&mut self.months);
        self.queue(PendingScroll::Reset);
        self.status_message = self.months.label();
    }

    // --- Navigation ---

    pub fn nav_prev(&mut self) {
        let width = self.page_width;
        match self.view.mode {
            ViewMode::Month => {
                if let Some(jump) = self.months.go_prev() {
                    self.queue(match jump {
                        ScrollJump::Animated => PendingScroll::SlideFrom(-width),
                        ScrollJump::Instant => PendingScroll::Reset,
                    });
                    self.status_message = self.months.label();
                }
            }
            ViewMode::Week => {
                if let Some(jump) = self.view.weeks.as_mut().and_then(WeekWindow::go_prev) {
                    self.queue(match jump {
                        ScrollJump::Animated => PendingScroll::SlideFrom(-width),
                        ScrollJump::Instant => PendingScroll::Reset,
                    });
                    self.status_message = format!("Week of {}", self.week_label());
                }
            }
        }
    }

    pub fn nav_next(&mut self) {
        let width = self.page_width;
        match self.view.mode {
            ViewMode::Month => {
                if let Some(jump) = self.months.go_next() {
                    self.queue(match jump {
                        ScrollJump::Animated => PendingScroll::SlideFrom(width),
                        ScrollJump::Instant => PendingScroll::Reset,
                    });
                    self.status_message = self.months.label();
                }
            }
            ViewMode::Week => {
                if let Some(jump) = self.view.weeks.as_mut().and_then(WeekWindow::go_next) {
                    self.queue(match jump {
                        ScrollJump::Animated => PendingScroll::SlideFrom(width),
                        ScrollJump::Instant => PendingScroll::Reset,
                    });
                    self.status_message = format!("Week of {}", self.week_label());
                }
            }
        }
    }

    /// Jump to the month containing `date`, from either view mode.
    pub fn jump_to(&mut self, date: NaiveDate) {
        match self.view.mode {
            ViewMode::Month => {
                let before = self.months.current_month();
                let jump = self.months.go_to_month(date);
                let target = self.months.current_month();
                match jump {
                    ScrollJump::Animated if target != before => {
                        let sign = if target > before { 1.0 } else { -1.0 };
                        self.queue(PendingScroll::SlideFrom(sign * self.page_width));
                    }
                    ScrollJump::Animated => {}
                    ScrollJump::Instant => self.queue(PendingScroll::Reset),
                }
                self.status_message = self.months.label();
            }
            ViewMode::Week => {
                // Rebuild the week window around the requested date.
                self.view.weeks = WeekWindow::init(date).or_else(|| {
                    log::warn!("week window init failed for {}, retrying with today", date);
                    WeekWindow::init(chrono::Local::now().date_naive())
                });
                self.queue(PendingScroll::Reset);
                self.status_message = format!("Week of {}", self.week_label());
            }
        }
        self.jump_date = date;
    }

    pub fn go_today(&mut self) {
        self.jump_to(chrono::Local::now().date_naive());
    }

    /// A drag released into a horizontal page swipe: land one page over and
    /// let the window extend itself at the boundary.
    fn settle_drag(&mut self, forward: bool) {
        let width = self.page_width;
        match self.view.mode {
            ViewMode::Month => {
                let len = self.months.pages.len();
                if len == 0 {
                    return;
                }
                let landed = if forward {
                    (self.months.index + 1).min(len - 1)
                } else {
                    self.months.index.saturating_sub(1)
                };
                let before = self.months.current_month();
                self.months.settle(landed);
                if self.months.current_month() != before {
                    let delta = if forward { width } else { -width };
                    self.queue(PendingScroll::Rebase(delta));
                }
                self.status_message = self.months.label();
            }
            ViewMode::Week => {
                let Some(weeks) = self.view.weeks.as_mut() else {
                    return;
                };
                let len = weeks.pages.len();
                if len == 0 {
                    return;
                }
                let landed = if forward {
                    (weeks.index + 1).min(len - 1)
                } else {
                    weeks.index.saturating_sub(1)
                };
                let before = weeks.current_week_start();
                weeks.settle(landed);
                if weeks.current_week_start() != before {
                    let delta = if forward { width } else { -width };
                    self.queue(PendingScroll::Rebase(delta));
                }
                self.status_message = format!("Week of {}", self.week_label());
            }
        }
    }

    fn week_label(&self) -> String {
        self.view
            .weeks
            .as_ref()
            .and_then(WeekWindow::current_week_start)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Header label: month label in month mode, the settled week's month
    /// label in week mode, empty when the week window is missing.
    pub fn current_label(&self) -> String {
        match self.view.mode {
            ViewMode::Month => self.months.label(),
            ViewMode::Week => self
                .view
                .weeks
                .as_ref()
                .map(WeekWindow::label)
                .unwrap_or_default(),
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Keyboard shortcuts, handled outside panel closures
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.nav_prev();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.nav_next();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::T)) {
            self.go_today();
        }

        // Apply the scroll correction queued by the previous frame; the
        // window mutation it belongs to has been committed by now.
        if let Some(pending) = self.pending_scroll.take() {
            let id = self.active_offset_id();
            match pending {
                PendingScroll::Reset => self.tracker.reset(ctx, id),
                PendingScroll::SlideFrom(offset) => self.tracker.slide_from(ctx, id, offset),
                PendingScroll::Rebase(delta) => self.tracker.rebase_x(ctx, id, delta),
            }
            ctx.request_repaint();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let pages = match self.view.mode {
                            ViewMode::Month => self.months.pages.len(),
                            ViewMode::Week => {
                                self.view.weeks.as_ref().map(|w| w.pages.len()).unwrap_or(0)
                            }
                        };
                        ui.label(
                            egui::RichText::new(format!("Pages: {}", pages))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: header + calendar body
        egui::CentralPanel::default().show(ctx, |ui| {
            self.page_width = ui.available_width();

            let label = self.current_label();
            let mut jump_date = self.jump_date;
            let header_action = ui::header::show_header(&label, &mut jump_date, ui);
            self.jump_date = jump_date;
            match header_action {
                HeaderAction::Prev => self.nav_prev(),
                HeaderAction::Next => self.nav_next(),
                HeaderAction::JumpTo(date) => self.jump_to(date),
                HeaderAction::None => {}
            }

            ui.add_space(4.0);

            let height = gesture::view_height(ctx, self.view.mode);
            let interaction = match self.view.mode {
                ViewMode::Month => ui::month_view::show_month_view(
                    &self.months,
                    &self.view,
                    &mut self.tracker,
                    height,
                    ui,
                ),
                ViewMode::Week => match self.view.weeks.as_ref() {
                    Some(weeks) => {
                        ui::week_view::show_week_view(weeks, &self.view, &mut self.tracker, height, ui)
                    }
                    None => Default::default(),
                },
            };

            if let Some(date) = interaction.pressed {
                self.view.select(date);
                self.status_message = format!("Selected {}", date.format("%Y-%m-%d"));
            }

            match interaction.swipe {
                Swipe::Up if self.view.mode == ViewMode::Month => self.enter_week_view(),
                Swipe::Down if self.view.mode == ViewMode::Week => self.enter_month_view(),
                Swipe::PagePrev => self.settle_drag(false),
                Swipe::PageNext => self.settle_drag(true),
                _ => {}
            }
        });

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
