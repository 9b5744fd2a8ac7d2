//! Single-pass schedule text parser.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{ClockTime, LineId};

use super::error::{MalformedScheduleError, MalformedScheduleKind};

/// Ordered stop names per line, in first-seen order.
pub type LineStops = BTreeMap<LineId, Vec<String>>;

/// Directed segment times: `from → to → minutes`.
pub type SegmentTimes = BTreeMap<String, BTreeMap<String, u32>>;

/// Result of parsing a schedule source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Stops of each line, deduplicated within the line.
    pub lines: LineStops,

    /// First recorded travel time between adjacent stops.
    pub times: SegmentTimes,
}

/// One classified, non-blank schedule line.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Header(LineId),
    Stop { name: String, time: ClockTime },
}

/// Scan state threaded through the parse.
#[derive(Debug, Default)]
struct ParserState {
    /// Line set by the most recent header.
    current_line: Option<LineId>,

    /// Time of the last stop appended to each line's list.
    tail_times: BTreeMap<LineId, ClockTime>,
}

impl ParserState {
    fn start_line(&mut self, id: LineId, schedule: &mut Schedule) {
        let resumed = schedule.lines.contains_key(&id);
        debug!(line = %id, resumed, "schedule line header");
        schedule.lines.entry(id.clone()).or_default();
        self.current_line = Some(id);
    }

    fn add_stop(
        &mut self,
        name: String,
        time: ClockTime,
        schedule: &mut Schedule,
    ) -> Result<(), MalformedScheduleKind> {
        let line = self
            .current_line
            .as_ref()
            .ok_or(MalformedScheduleKind::EntryBeforeHeader)?;

        let stops = schedule.lines.entry(line.clone()).or_default();
        if stops.contains(&name) {
            // Repeats are not stops and do not move the tail
            return Ok(());
        }

        // Each appended stop is timed from the line's current tail, so
        // neighbours in the list always have a segment time
        if let Some(previous) = stops.last()
            && let Some(previous_time) = self.tail_times.get(line)
        {
            schedule
                .times
                .entry(previous.clone())
                .or_default()
                .entry(name.clone())
                .or_insert_with(|| previous_time.minutes_between(time));
        }

        stops.push(name);
        self.tail_times.insert(line.clone(), time);
        Ok(())
    }
}

/// Parse schedule text into per-line stop lists and segment times.
///
/// The source is a sequence of `<id>:` headers, each followed by
/// `<stop name> HH:MM` entries. Blank lines are skipped and do not end the
/// current line. A header repeating an earlier id resumes that line: its
/// stop list continues and the next new stop is timed from the line's last
/// stop. Stops of different lines are never linked.
///
/// Segment times are recorded between consecutive *newly added* stops of a
/// line as the absolute minutes-of-day difference. The first line to pass
/// an ordered pair of stops sets its time; later lines never overwrite it,
/// and no reverse entry is derived.
///
/// # Examples
///
/// ```
/// use tram_network::domain::LineId;
/// use tram_network::schedule::parse_schedule;
///
/// let schedule = parse_schedule("1:\nStopA 08:00\nStopB 08:05\nStopC 08:12\n").unwrap();
/// assert_eq!(schedule.lines[&LineId::from("1")], ["StopA", "StopB", "StopC"]);
/// assert_eq!(schedule.times["StopA"]["StopB"], 5);
/// assert_eq!(schedule.times["StopB"]["StopC"], 7);
/// ```
pub fn parse_schedule(source: &str) -> Result<Schedule, MalformedScheduleError> {
    let mut schedule = Schedule::default();
    let mut state = ParserState::default();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fail = |kind| MalformedScheduleError::new(index + 1, line, kind);

        match classify(line).map_err(fail)? {
            Entry::Header(id) => state.start_line(id, &mut schedule),
            Entry::Stop { name, time } => {
                state.add_stop(name, time, &mut schedule).map_err(fail)?;
            }
        }
    }

    debug!(
        lines = schedule.lines.len(),
        segments = schedule.times.values().map(BTreeMap::len).sum::<usize>(),
        "schedule parsed"
    );

    Ok(schedule)
}

/// Classify a trimmed, non-empty line as a header or a stop entry.
fn classify(line: &str) -> Result<Entry, MalformedScheduleKind> {
    if let Some(id) = line.strip_suffix(':') {
        let id = id.trim();
        if id.is_empty() {
            return Err(MalformedScheduleKind::InvalidHeader("id must not be empty"));
        }
        if id.contains(':') {
            return Err(MalformedScheduleKind::InvalidHeader(
                "id must not contain ':'",
            ));
        }
        return Ok(Entry::Header(LineId::from(id)));
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((time, name_tokens)) = tokens.split_last() else {
        return Err(MalformedScheduleKind::MissingStopName);
    };
    if name_tokens.is_empty() {
        return Err(MalformedScheduleKind::MissingStopName);
    }

    let time = ClockTime::parse_hhmm(time)?;
    Ok(Entry::Stop {
        name: name_tokens.join(" "),
        time,
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
