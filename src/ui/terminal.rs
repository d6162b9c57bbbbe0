//! Terminal front end: a status panel, the combat log, and a one-line prompt.

use super::combat_log::{CombatLog, Tone};
use super::narration;
use super::status_panel::{draw_status_panel, StatusPanel};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lost_crown::campaign::{question_for_level, Trivia};
use lost_crown::character::Fighter;
use lost_crown::combat::PlayerAction;
use lost_crown::core::error::{parse_confirmation, GameError, Result};
use lost_crown::core::{DecisionRequest, EventSink, GameEvent, LootOffer, PlayerInput};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::warn;

/// Owns the terminal for the lifetime of the game. Dropping it restores the shell.
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    log: CombatLog,
    status: StatusPanel,
    menu: Vec<String>,
    prompt: String,
    input: String,
}

impl TerminalFrontend {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            log: CombatLog::new(),
            status: StatusPanel::default(),
            menu: Vec::new(),
            prompt: String::new(),
            input: String::new(),
        })
    }

    /// Starts a fresh screen for a new adventure.
    pub fn reset(&mut self) {
        self.log.clear();
        self.status = StatusPanel::default();
    }

    pub fn note(&mut self, text: impl Into<String>, tone: Tone) {
        self.log.note(text, tone);
    }

    /// Shows `prompt` with `menu` above it and blocks until Enter.
    /// Esc or Ctrl-C yields [`GameError::Quit`].
    pub fn read_line(&mut self, prompt: &str, menu: Vec<String>) -> Result<String> {
        self.prompt = prompt.to_string();
        self.menu = menu;
        self.input.clear();

        loop {
            self.draw()?;
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(GameError::Quit);
                }
                KeyCode::Char(c) => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => {
                    let line = std::mem::take(&mut self.input);
                    self.menu.clear();
                    self.prompt.clear();
                    return Ok(line);
                }
                KeyCode::Esc => return Err(GameError::Quit),
                _ => {}
            }
        }
    }

    /// Y/N question; anything but `Y` is a no.
    pub fn confirm(&mut self, prompt: &str, menu: Vec<String>) -> Result<bool> {
        let answer = self.read_line(prompt, menu)?;
        Ok(parse_confirmation(&answer))
    }

    fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            log,
            status,
            menu,
            prompt,
            input,
        } = self;
        terminal.draw(|frame| draw_screen(frame, status, log, menu, prompt, input))?;
        Ok(())
    }

    fn redraw(&mut self) {
        if let Err(err) = self.draw() {
            warn!(%err, "redraw failed");
        }
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn action_menu(request: &DecisionRequest<'_>) -> Vec<String> {
    let hero = request.player.combatant();
    let special = request.player.special_move();
    PlayerAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let note = match action {
                PlayerAction::Attack => format!("hit {}", request.target.name()),
                PlayerAction::Heal if hero.heal_cooldown() > 0 => "cooling down".to_string(),
                PlayerAction::Heal => "restore 15% HP, untouchable this turn".to_string(),
                PlayerAction::Defend => "halve incoming hits".to_string(),
                PlayerAction::Special if hero.special_cooldown() > 0 => {
                    format!("{} in {} turn(s)", special.name, hero.special_cooldown())
                }
                PlayerAction::Special => format!("{} ready", special.name),
            };
            format!("{}. {:<8} {}", i + 1, action.label(), note)
        })
        .collect()
}

impl PlayerInput for TerminalFrontend {
    fn choose_action(&mut self, request: &DecisionRequest<'_>) -> Result<PlayerAction> {
        self.status.sync(request);
        let prompt = format!("Round {} - choose your move (1-4):", request.round);
        let input = self.read_line(&prompt, action_menu(request))?;
        PlayerAction::from_menu(&input)
    }

    fn accept_loot(&mut self, offer: &LootOffer<'_>) -> Result<bool> {
        let (offered, current) = match offer {
            LootOffer::Weapon { offered, current } => (offered.to_string(), current.to_string()),
            LootOffer::Armor { offered, current } => (offered.to_string(), current.to_string()),
        };
        self.confirm(
            "Equip it? (Y/N)",
            vec![format!("Offered:  {}", offered), format!("Equipped: {}", current)],
        )
    }
}

impl EventSink for TerminalFrontend {
    fn emit(&mut self, event: &GameEvent) {
        self.status.apply(event);
        self.log.record(event);
        match event {
            GameEvent::LevelEntered {
                level, max_levels, ..
            } => self
                .log
                .note(narration::level_intro(*level, *max_levels), Tone::Plain),
            GameEvent::RunWon { elapsed_ms } => {
                for line in narration::victory_lines(*elapsed_ms) {
                    self.log.note(line, Tone::Loot);
                }
            }
            GameEvent::RunLost { level, cause } => {
                self.log.note(narration::defeat_line(*level, *cause), Tone::Defeat)
            }
            _ => {}
        }
        self.redraw();
    }
}

impl Trivia for TerminalFrontend {
    fn quiz(&mut self, level: u32) -> Result<bool> {
        let question = question_for_level(level);
        let answer = self.read_line(
            "Answer A or B:",
            vec![
                question.prompt.to_string(),
                format!("A) {}", question.option_a),
                format!("B) {}", question.option_b),
            ],
        )?;
        Ok(question.is_correct(&answer))
    }
}

fn draw_screen(
    frame: &mut Frame,
    status: &StatusPanel,
    log: &CombatLog,
    menu: &[String],
    prompt: &str,
    input: &str,
) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),                      // Status
            Constraint::Min(5),                         // Log
            Constraint::Length(menu.len() as u16 + 2),  // Menu
            Constraint::Length(3),                      // Prompt
        ])
        .split(size);

    draw_status_panel(frame, chunks[0], status);
    draw_log(frame, chunks[1], log);

    let menu_lines: Vec<Line> = menu.iter().map(|m| Line::from(m.as_str())).collect();
    frame.render_widget(
        Paragraph::new(menu_lines).block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    let prompt_line = Line::from(vec![
        Span::styled(
            format!("{} ", prompt),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}_", input)),
    ]);
    frame.render_widget(
        Paragraph::new(prompt_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" [Esc] Quit "),
        ),
        chunks[3],
    );
}

fn draw_log(frame: &mut Frame, area: Rect, log: &CombatLog) {
    let height = area.height.saturating_sub(2) as usize;
    let all: Vec<_> = log.lines().collect();
    let start = all.len().saturating_sub(height);
    let lines: Vec<Line> = all[start..]
        .iter()
        .map(|l| Line::from(Span::styled(l.text.clone(), Style::default().fg(l.tone.color()))))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Chronicle ")),
        area,
    );
}
