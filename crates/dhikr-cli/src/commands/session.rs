//! Line-driven interactive session over one counter engine.
//!
//! The engine is clock-free, so every line first ticks it with the current
//! time; a completion that fell due while waiting for input fires before the
//! command itself runs. `wait <ms>` sleeps and ticks, for scripted input.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use dhikr_core::counter::{ConfirmationRequest, CounterEngine, CounterItem, SwipeTracker};
use dhikr_core::events::{now_ms, Event, FeedbackKind, ResetReason};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tap,
    Next,
    Prev,
    /// Drag start and, when the pointer moved, end position.
    Swipe(f32, Option<f32>),
    Select(String),
    Reset,
    Add { name: String, target: String },
    Edit { id: String, name: String, target: String },
    Delete(String),
    List,
    Status,
    Wait(u64),
    Help,
    Quit,
}

/// `<name words...> [target]`: a trailing integer is the target.
fn split_name_target(words: &[&str]) -> (String, String) {
    match words.split_last() {
        Some((last, rest)) if !rest.is_empty() && last.parse::<i64>().is_ok() => {
            (rest.join(" "), (*last).to_string())
        }
        _ => (words.join(" "), String::new()),
    }
}

fn position(word: &str) -> Result<f32, String> {
    word.parse().map_err(|_| format!("not a position: {word}"))
}

pub fn parse(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Ok(Command::Status);
    };
    let cmd = match (head, args) {
        ("tap" | "t" | "+", []) => Command::Tap,
        ("next" | "n", []) => Command::Next,
        ("prev" | "p", []) => Command::Prev,
        ("swipe", [from, rest @ ..]) if rest.len() <= 1 => {
            let from = position(from)?;
            let to = rest.first().map(|to| position(to)).transpose()?;
            Command::Swipe(from, to)
        }
        ("select", [id]) => Command::Select((*id).to_string()),
        ("reset", []) => Command::Reset,
        ("add", words) if !words.is_empty() => {
            let (name, target) = split_name_target(words);
            Command::Add { name, target }
        }
        ("edit", [id, words @ ..]) if !words.is_empty() => {
            let (name, target) = split_name_target(words);
            Command::Edit {
                id: (*id).to_string(),
                name,
                target,
            }
        }
        ("delete", [id]) => Command::Delete((*id).to_string()),
        ("list" | "ls", []) => Command::List,
        ("status" | "s", []) => Command::Status,
        ("wait", [ms]) => Command::Wait(ms.parse().map_err(|_| format!("not a duration: {ms}"))?),
        ("help" | "?", []) => Command::Help,
        ("quit" | "q" | "exit", []) => Command::Quit,
        (head, _) => return Err(format!("bad command: {head} (try help)")),
    };
    Ok(cmd)
}

pub struct Session<R, W> {
    engine: CounterEngine,
    input: R,
    out: W,
    json: bool,
    sound: bool,
    editable: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: CounterEngine, input: R, out: W) -> Self {
        Self {
            engine,
            input,
            out,
            json: false,
            sound: false,
            editable: false,
        }
    }

    /// Print events as JSON lines instead of text.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Ring the terminal bell on every accepted tap.
    pub fn sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// Allow add/edit/delete/select.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    #[cfg(test)]
    fn into_engine(self) -> CounterEngine {
        self.engine
    }

    /// Read commands until `quit`, end of input, or a finished sequence.
    pub fn run(&mut self) -> io::Result<()> {
        self.emit(vec![self.engine.snapshot(now_ms())])?;
        loop {
            if !self.json {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = self.read_line()? else {
                break;
            };
            let ticked = self.engine.tick(now_ms());
            self.emit(ticked)?;

            match parse(&line) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd)?,
                Err(msg) => writeln!(self.out, "{msg}")?,
            }
            if self.engine.is_finished() {
                break;
            }
        }
        let events = self.engine.shutdown(now_ms());
        self.emit(events)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn execute(&mut self, cmd: Command) -> io::Result<()> {
        let now = now_ms();
        if !self.editable
            && matches!(
                cmd,
                Command::Add { .. } | Command::Edit { .. } | Command::Delete(_) | Command::Select(_)
            )
        {
            return writeln!(self.out, "this list cannot be edited");
        }

        match cmd {
            Command::Tap => {
                let events = self.engine.increment(now);
                let accepted = events.iter().any(Event::is_increment);
                self.emit(events)?;
                if !accepted && !self.json {
                    self.explain_rejection(now)?;
                }
            }
            Command::Next => {
                let events = self.engine.select_next(now);
                self.emit(events)?;
            }
            Command::Prev => {
                let events = self.engine.select_previous(now);
                self.emit(events)?;
            }
            Command::Swipe(from, to) => {
                let mut gesture = SwipeTracker::new();
                gesture.touch_start(from);
                if let Some(to) = to {
                    gesture.touch_move(to);
                }
                let events = self.engine.end_gesture(&mut gesture, now);
                self.emit(events)?;
            }
            Command::Select(id) => {
                let events = self.engine.select(&id, now);
                if events.is_empty() {
                    writeln!(self.out, "no such item: {id}")?;
                }
                self.emit(events)?;
            }
            Command::Reset => match self.engine.request_reset() {
                Some(request) => self.confirm(request)?,
                None => writeln!(self.out, "nothing to reset")?,
            },
            Command::Add { name, target } => match self.engine.create(&name, &target, now) {
                Some(item) => self.say(&format!("added {}", describe(&item)), &item)?,
                None => writeln!(self.out, "name must not be empty")?,
            },
            Command::Edit { id, name, target } => {
                if self.engine.update(&id, &name, &target) {
                    if let Some(item) = self.engine.store().get(&id).cloned() {
                        self.say(&format!("updated {}", describe(&item)), &item)?;
                    }
                } else {
                    writeln!(self.out, "no such item or empty name")?;
                }
            }
            Command::Delete(id) => match self.engine.request_delete(&id) {
                Some(request) => self.confirm(request)?,
                None => writeln!(self.out, "no such item: {id}")?,
            },
            Command::List => self.list()?,
            Command::Status => self.emit(vec![self.engine.snapshot(now)])?,
            Command::Wait(ms) => {
                std::thread::sleep(Duration::from_millis(ms));
                let events = self.engine.tick(now_ms());
                self.emit(events)?;
            }
            Command::Help => self.help()?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Ask, answer, and print whatever the answer caused.
    fn confirm(&mut self, request: ConfirmationRequest) -> io::Result<()> {
        if self.json {
            let event = Event::ConfirmationRequested {
                request: request.clone(),
                at: dhikr_core::events::timestamp(now_ms()),
            };
            writeln!(self.out, "{}", to_json(&event)?)?;
        }
        write!(self.out, "{} [y/N] ", request.prompt())?;
        self.out.flush()?;
        let yes = self
            .read_line()?
            .is_some_and(|answer| super::is_yes(&answer));
        let events = self.engine.resolve_confirmation(request.id, yes, now_ms());
        self.emit(events)
    }

    fn emit(&mut self, events: Vec<Event>) -> io::Result<()> {
        for event in events {
            if let Event::ConfirmationRequested { request, .. } = event {
                self.confirm(request)?;
                continue;
            }
            if self.json {
                writeln!(self.out, "{}", to_json(&event)?)?;
            } else {
                self.render(&event)?;
            }
        }
        Ok(())
    }

    fn name_of(&self, id: &str) -> String {
        self.engine
            .store()
            .get(id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn render(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::Incremented {
                count, target, ..
            } => {
                if *target > 0 {
                    writeln!(self.out, "{count}/{target}")
                } else {
                    writeln!(self.out, "{count}")
                }
            }
            Event::Feedback {
                kind: FeedbackKind::Light,
                ..
            } if self.sound => {
                eprint!("\x07");
                Ok(())
            }
            Event::Feedback { .. } => Ok(()),
            Event::TargetReached { completions, .. } => {
                writeln!(self.out, "target reached (completions: {completions})")
            }
            Event::CountReset {
                item_id,
                reason: ResetReason::Manual,
                ..
            } => {
                let name = self.name_of(item_id);
                writeln!(self.out, "{name}: 0")
            }
            Event::CountReset { .. } => Ok(()),
            Event::AutoAdvanced { to, .. } | Event::Selected { item_id: to, .. } => {
                let name = self.name_of(to);
                writeln!(self.out, "-> {name}")
            }
            Event::ConfirmationRequested { .. } => Ok(()),
            Event::ConfirmationDeclined { .. } => writeln!(self.out, "cancelled"),
            Event::ItemDeleted { item_id, .. } => writeln!(self.out, "deleted {item_id}"),
            Event::SequenceFinished { .. } => writeln!(self.out, "done"),
            Event::StateSnapshot {
                active_item,
                active_index,
                item_count,
                cooldown_remaining_ms,
                ..
            } => match (active_item, active_index) {
                (Some(item), Some(idx)) => {
                    write!(self.out, "[{}/{}] {}", idx + 1, item_count, describe(item))?;
                    if *cooldown_remaining_ms > 0 {
                        write!(self.out, "  (wait {cooldown_remaining_ms} ms)")?;
                    }
                    writeln!(self.out)
                }
                _ => writeln!(self.out, "no active item ({item_count} items)"),
            },
        }
    }

    fn say(&mut self, text: &str, item: &CounterItem) -> io::Result<()> {
        if self.json {
            writeln!(self.out, "{}", to_json(item)?)
        } else {
            writeln!(self.out, "{text}")
        }
    }

    fn explain_rejection(&mut self, now: u64) -> io::Result<()> {
        if self.engine.pending_confirmation().is_some() {
            writeln!(self.out, "answer the open question first")
        } else if self.engine.active_item().is_none() {
            writeln!(self.out, "nothing to count")
        } else {
            let remaining = self.engine.cooldown().remaining_ms(now);
            writeln!(self.out, "wait {remaining} ms")
        }
    }

    fn list(&mut self) -> io::Result<()> {
        if self.json {
            return writeln!(self.out, "{}", to_json(self.engine.items())?);
        }
        let active = self.engine.active_id().map(str::to_owned);
        let lines: Vec<String> = self
            .engine
            .items()
            .iter()
            .map(|item| {
                let marker = if active.as_deref() == Some(item.id.as_str()) {
                    '*'
                } else {
                    ' '
                };
                format!("{marker} {:<10} {}", item.id, describe(item))
            })
            .collect();
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "tap | next | prev | swipe <from> [to] | reset | list | status | wait <ms> | quit")?;
        if self.editable {
            writeln!(
                self.out,
                "select <id> | add <name> [target] | edit <id> <name> [target] | delete <id>"
            )?;
        }
        Ok(())
    }
}

/// One-line summary: name, progress, lifetime statistics.
pub fn describe(item: &CounterItem) -> String {
    let progress = if item.is_open_ended() {
        item.count.to_string()
    } else {
        format!("{}/{} ({:.0}%)", item.count, item.target, item.progress() * 100.0)
    };
    let mut line = format!(
        "{}  {}  total {}  completions {}",
        item.name, progress, item.total_all_time, item.completions
    );
    if let Some(virtue) = &item.virtue {
        line.push_str(&format!("  ({virtue})"));
    }
    line
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhikr_core::counter::{EngineConfig, NavigationMode};
    use std::io::Cursor;

    fn engine(items: Vec<CounterItem>, navigation: NavigationMode) -> CounterEngine {
        CounterEngine::ephemeral(
            EngineConfig {
                surface: "cli".into(),
                cooldown_ms: 0,
                navigation,
                seed: Vec::new(),
            },
            items,
        )
    }

    fn run(engine: CounterEngine, script: &str, editable: bool) -> (CounterEngine, String) {
        let mut out = Vec::new();
        let mut session = Session::new(engine, Cursor::new(script.to_string()), &mut out)
            .editable(editable);
        session.run().unwrap();
        let engine = session.into_engine();
        (engine, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_names_with_spaces() {
        assert_eq!(
            parse("add سبحان الله 33").unwrap(),
            Command::Add {
                name: "سبحان الله".into(),
                target: "33".into()
            }
        );
        assert_eq!(
            parse("add تسبيح").unwrap(),
            Command::Add {
                name: "تسبيح".into(),
                target: String::new()
            }
        );
        assert_eq!(parse("swipe 300 100").unwrap(), Command::Swipe(300.0, Some(100.0)));
        assert_eq!(parse("swipe 300").unwrap(), Command::Swipe(300.0, None));
        assert!(parse("swipe 1 2 3").is_err());
        assert_eq!(parse("").unwrap(), Command::Status);
        assert!(parse("fly").is_err());
    }

    #[test]
    fn completion_advances_on_next_line() {
        let items = vec![CounterItem::new("a", "أ", 2), CounterItem::new("b", "ب", 0)];
        let (engine, out) = run(engine(items, NavigationMode::Cyclic), "tap\ntap\nstatus\nquit\n", false);
        assert!(out.contains("target reached (completions: 1)"));
        assert!(out.contains("-> ب"));
        assert_eq!(engine.active_id(), Some("b"));
        assert_eq!(engine.store().get("a").unwrap().count, 0);
    }

    #[test]
    fn delete_asks_first() {
        let items = vec![CounterItem::new("a", "أ", 0), CounterItem::new("b", "ب", 0)];
        let (engine, out) = run(
            engine(items, NavigationMode::Cyclic),
            "delete b\nn\ndelete b\ny\n",
            true,
        );
        assert!(out.contains("cancelled"));
        assert!(out.contains("deleted b"));
        assert_eq!(engine.items().len(), 1);
    }

    #[test]
    fn swipe_without_movement_stays_put() {
        let items = vec![CounterItem::new("a", "أ", 0), CounterItem::new("b", "ب", 0)];
        let (stayed, _) = run(engine(items.clone(), NavigationMode::Cyclic), "swipe 300\nquit\n", false);
        assert_eq!(stayed.active_id(), Some("a"));

        let (moved, out) = run(engine(items, NavigationMode::Cyclic), "swipe 300 100\nquit\n", false);
        assert_eq!(moved.active_id(), Some("b"));
        assert!(out.contains("-> ب"));
    }

    #[test]
    fn describe_shows_percentage_for_targets() {
        let mut item = CounterItem::new("a", "أ", 4);
        item.count = 1;
        assert!(describe(&item).contains("1/4 (25%)"));
        assert!(!describe(&CounterItem::new("b", "ب", 0)).contains('%'));
    }

    #[test]
    fn read_only_session_refuses_edits() {
        let items = vec![CounterItem::new("a", "أ", 1)];
        let (engine, out) = run(engine(items, NavigationMode::Bounded), "add x\nquit\n", false);
        assert!(out.contains("cannot be edited"));
        assert_eq!(engine.items().len(), 1);
    }

    #[test]
    fn bounded_session_ends_when_finished() {
        let items = vec![CounterItem::new("a", "أ", 1)];
        let (engine, out) = run(engine(items, NavigationMode::Bounded), "tap\nstatus\ny\ntap\n", false);
        assert!(out.contains("done"));
        assert!(engine.is_finished());
        assert_eq!(engine.store().get("a").unwrap().total_all_time, 1);
    }
}
