use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use scrollfx_core::demo::DemoPage;
use scrollfx_core::{Pipeline, TickDiscipline, Ticker};
use scrollfx_protocol::{ClipShape, Scene, StyleCommand, Viewport};

const SCROLL_STEP: f64 = 40.0;

/// Applied command state, the terminal stand-in for element styles.
#[derive(Default)]
struct Applied {
    commands: Vec<StyleCommand>,
    theme_active: bool,
    // One-shot: fade-ins stay visible once hit.
    faded_in: Vec<String>,
    active_index: Option<usize>,
}

impl Applied {
    fn apply(&mut self, commands: Vec<StyleCommand>) {
        for cmd in &commands {
            match cmd {
                StyleCommand::ThemeActivated { active } => self.theme_active = *active,
                StyleCommand::SetOpacity { target, .. } => {
                    let name = target.to_string();
                    if !self.faded_in.contains(&name) {
                        self.faded_in.push(name);
                    }
                }
                StyleCommand::SetActiveIndex { index, .. } => self.active_index = Some(*index),
                _ => {}
            }
        }
        self.commands = commands;
    }
}

pub fn render_tui(scene: Scene) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let page = DemoPage::new();
    let mut pipeline = Pipeline::new(scene);
    // Scroll only moves on input here, so event-driven ticks suffice.
    let ticker = Ticker::new(TickDiscipline::EventDriven);

    let mut scroll_y: f64 = 0.0;
    let mut applied = Applied::default();

    loop {
        let viewport = Viewport::new(1280.0, 1000.0);

        if ticker.should_tick() {
            applied.apply(pipeline.tick(&page.geometry_at(scroll_y, viewport)));
        }

        terminal.draw(|frame| {
            let area = frame.area();

            let theme = if applied.theme_active { "on" } else { "off" };
            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(format!(
                    " scrollfx — scroll {scroll_y:.0}px | theme {theme} | ↑↓ scroll | g/G ends | q quit ",
                ))
                .style(Style::default().fg(Color::White).bg(if applied.theme_active {
                    Color::Blue
                } else {
                    Color::DarkGray
                }));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let block = Block::default()
                .borders(Borders::NONE)
                .style(Style::default().bg(Color::Black));
            frame.render_widget(block, content_area);

            draw_command_list(frame, content_area, &applied);
            draw_sweep_diagonal(frame, content_area, &applied);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            let max_scroll = page.max_scroll(&Viewport::new(1280.0, 1000.0));
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => {
                        scroll_y = (scroll_y - SCROLL_STEP).max(0.0);
                        ticker.request();
                    }
                    KeyCode::Down => {
                        scroll_y = (scroll_y + SCROLL_STEP).min(max_scroll);
                        ticker.request();
                    }
                    KeyCode::PageUp => {
                        scroll_y = (scroll_y - 1000.0).max(0.0);
                        ticker.request();
                    }
                    KeyCode::PageDown => {
                        scroll_y = (scroll_y + 1000.0).min(max_scroll);
                        ticker.request();
                    }
                    KeyCode::Char('g') => {
                        scroll_y = 0.0;
                        ticker.request();
                    }
                    KeyCode::Char('G') => {
                        scroll_y = max_scroll;
                        ticker.request();
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        scroll_y = (scroll_y + SCROLL_STEP).min(max_scroll);
                        ticker.request();
                    }
                    MouseEventKind::ScrollUp => {
                        scroll_y = (scroll_y - SCROLL_STEP).max(0.0);
                        ticker.request();
                    }
                    _ => {}
                },
                Event::Resize(_, _) => ticker.request(),
                _ => {}
            }
        }
    }
    ticker.cancel();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Left panel: one line per applied style, plus latched state at the bottom.
fn draw_command_list(frame: &mut ratatui::Frame, area: Rect, applied: &Applied) {
    let mut row: u16 = 0;
    let half_width = area.width / 2;

    for cmd in &applied.commands {
        if row >= area.height {
            break;
        }
        let (name, summary, color) = match cmd {
            StyleCommand::SetClip { target, shape } => {
                (target.to_string(), shape.to_string(), Color::Cyan)
            }
            StyleCommand::SetTransform {
                target,
                scale,
                translate_y_pct,
            } => (
                target.to_string(),
                format!("scale {scale:.3}  translateY {translate_y_pct:.1}%"),
                Color::Yellow,
            ),
            StyleCommand::SetOffset { target, y_px } => {
                (target.to_string(), format!("offset {y_px:.1}px"), Color::Green)
            }
            StyleCommand::SetOpacity { target, opacity } => {
                (target.to_string(), format!("opacity {opacity}"), Color::White)
            }
            StyleCommand::ThemeActivated { .. } | StyleCommand::SetActiveIndex { .. } => continue,
        };
        draw_line(
            frame,
            area,
            row,
            half_width,
            &format!("{name:>16}  {summary}"),
            color,
        );
        row += 1;
    }

    if let Some(index) = applied.active_index
        && row < area.height
    {
        draw_line(
            frame,
            area,
            row,
            half_width,
            &format!("{:>16}  step {index}", "spotlight"),
            Color::Magenta,
        );
        row += 1;
    }
    if !applied.faded_in.is_empty() && row < area.height {
        draw_line(
            frame,
            area,
            row,
            half_width,
            &format!("{:>16}  {}", "faded in", applied.faded_in.join(", ")),
            Color::Gray,
        );
    }
}

/// Right panel: the first sweep clip drawn as its actual diagonal.
fn draw_sweep_diagonal(frame: &mut ratatui::Frame, area: Rect, applied: &Applied) {
    let Some((top_x, bottom_x)) = applied.commands.iter().find_map(|cmd| match cmd {
        StyleCommand::SetClip {
            shape: ClipShape::Sweep { top_x, bottom_x, .. },
            ..
        } => Some((*top_x, *bottom_x)),
        _ => None,
    }) else {
        return;
    };

    let panel_x = area.width / 2;
    let panel_width = f64::from(area.width - panel_x);
    let rows = f64::from(area.height);

    let buf = frame.buffer_mut();
    for row in 0..area.height {
        let t = f64::from(row) / rows.max(1.0);
        let x_pct = top_x + (bottom_x - top_x) * t;
        let col = (x_pct / 100.0 * panel_width) as i32;
        // Fill from the boundary to the right edge, like the overlay does.
        for c in col.max(0)..(area.width - panel_x).into() {
            let x = area.x + panel_x + c as u16;
            let y = area.y + row;
            if x < area.x + area.width {
                buf[(x, y)].set_char('░').set_fg(Color::Blue).set_bg(Color::Black);
            }
        }
    }
}

fn draw_line(
    frame: &mut ratatui::Frame,
    area: Rect,
    row: u16,
    max_width: u16,
    text: &str,
    color: Color,
) {
    let buf = frame.buffer_mut();
    for (i, ch) in text.chars().take(max_width as usize).enumerate() {
        let x = area.x + i as u16;
        let y = area.y + row;
        if x < area.x + area.width && y < area.y + area.height {
            buf[(x, y)].set_char(ch).set_fg(color).set_bg(Color::Black);
        }
    }
}
