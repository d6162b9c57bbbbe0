use lost_crown::character::Fighter;
use lost_crown::core::{DecisionRequest, GameEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Health readout for one fighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthBar {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

impl HealthBar {
    fn ratio(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            (f64::from(self.hp) / f64::from(self.max_hp)).clamp(0.0, 1.0)
        }
    }
}

/// What the top of the screen shows: the hero, their gear, and the foes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPanel {
    pub level: Option<(u32, u32)>,
    pub hero: Option<HealthBar>,
    pub class_line: String,
    pub gear_line: String,
    pub cooldown_line: String,
    pub monsters: Vec<HealthBar>,
}

impl StatusPanel {
    /// Refreshes everything from the snapshot handed to a player turn.
    pub fn sync(&mut self, request: &DecisionRequest<'_>) {
        let hero = request.player;
        let stats = hero.combatant();
        self.hero = Some(HealthBar {
            name: hero.name().to_string(),
            hp: stats.current_hp(),
            max_hp: stats.max_hp(),
        });
        self.class_line = format!(
            "{}  ATK {}  DEF {}",
            hero.archetype().name(),
            hero.attack_power(),
            hero.total_defense()
        );
        self.gear_line = format!("{} | {}", hero.weapon(), hero.armor());
        let special = hero.special_move();
        self.cooldown_line = match stats.special_cooldown() {
            0 => format!("{} ready", special.name),
            n => format!("{} in {} turn(s)", special.name, n),
        };
        if stats.heal_cooldown() > 0 {
            self.cooldown_line.push_str("  |  heal cooling down");
        }
        self.monsters = request
            .live_monsters
            .iter()
            .map(|m| HealthBar {
                name: m.name().to_string(),
                hp: m.combatant().current_hp(),
                max_hp: m.combatant().max_hp(),
            })
            .collect();
    }

    /// Applies health changes between player turns.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::LevelEntered {
                level, max_levels, ..
            } => self.level = Some((*level, *max_levels)),
            GameEvent::BattleStarted { .. } => self.monsters.clear(),
            GameEvent::DamageApplied {
                target,
                remaining_hp,
                ..
            } => self.set_hp(target, *remaining_hp),
            GameEvent::Healed { actor, hp, .. } => self.set_hp(actor, *hp),
            GameEvent::MonsterDefeated { name } => self.monsters.retain(|m| &m.name != name),
            GameEvent::ArmorEquipped { max_hp, .. } => {
                if let Some(hero) = &mut self.hero {
                    hero.hp += max_hp.saturating_sub(hero.max_hp);
                    hero.max_hp = *max_hp;
                }
            }
            GameEvent::TriviaAnswered { hp, .. } => {
                if let Some(hero) = &mut self.hero {
                    hero.hp = *hp;
                }
            }
            _ => {}
        }
    }

    fn set_hp(&mut self, name: &str, hp: u32) {
        let hero = self.hero.iter_mut().filter(|h| h.name == name);
        for bar in hero.chain(self.monsters.iter_mut().filter(|m| m.name == name)) {
            bar.hp = hp;
        }
    }
}

pub fn draw_status_panel(frame: &mut Frame, area: Rect, panel: &StatusPanel) {
    let title = match panel.level {
        Some((level, max)) => format!(" Level {}/{} ", level, max),
        None => " The Lost Crown ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    draw_hero(frame, chunks[0], panel);
    draw_monsters(frame, chunks[1], panel);
}

fn draw_hero(frame: &mut Frame, area: Rect, panel: &StatusPanel) {
    let Some(hero) = &panel.hero else {
        return;
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name + class
            Constraint::Length(1), // HP gauge
            Constraint::Length(1), // Gear
            Constraint::Length(1), // Cooldowns
            Constraint::Min(0),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            hero.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(panel.class_line.clone()),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);
    frame.render_widget(health_gauge(hero, Color::Green), rows[1]);
    frame.render_widget(
        Paragraph::new(panel.gear_line.clone()).style(Style::default().fg(Color::Yellow)),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(panel.cooldown_line.clone()).style(Style::default().fg(Color::Gray)),
        rows[3],
    );
}

fn draw_monsters(frame: &mut Frame, area: Rect, panel: &StatusPanel) {
    let constraints: Vec<Constraint> = panel
        .monsters
        .iter()
        .map(|_| Constraint::Length(2))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (bar, row) in panel.monsters.iter().zip(rows.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*row);
        frame.render_widget(
            Paragraph::new(bar.name.clone()).style(Style::default().fg(Color::Red)),
            parts[0],
        );
        frame.render_widget(health_gauge(bar, Color::Red), parts[1]);
    }
}

fn health_gauge(bar: &HealthBar, color: Color) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(bar.ratio())
        .label(format!("{}/{}", bar.hp, bar.max_hp))
}
