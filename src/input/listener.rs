//! Background keyboard capture.
//!
//! A dedicated thread publishes the most recent key press into a single
//! atomic slot: latest key wins, unconsumed intermediate keys are dropped.
//! There is no queue and no backpressure. The thread polls with a timeout
//! so it can observe the shutdown flag between keys instead of blocking
//! on the stream indefinitely.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// How long the capture thread waits for an event before re-checking the
/// shutdown flag.
const POLL_TIMEOUT: Duration = Duration::from_millis(25);

/// A captured key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    CtrlC,
}

// Slot encoding: 0 is "empty", chars map to their scalar value, and the
// non-char keys use codes above char::MAX.
const EMPTY: u32 = 0;
const CODE_LEFT: u32 = 0x0011_0001;
const CODE_RIGHT: u32 = 0x0011_0002;
const CODE_UP: u32 = 0x0011_0003;
const CODE_CTRL_C: u32 = 0x0011_0004;

fn encode(key: Key) -> u32 {
    match key {
        Key::Char(c) => c as u32,
        Key::Left => CODE_LEFT,
        Key::Right => CODE_RIGHT,
        Key::Up => CODE_UP,
        Key::CtrlC => CODE_CTRL_C,
    }
}

fn decode(code: u32) -> Option<Key> {
    match code {
        EMPTY => None,
        CODE_LEFT => Some(Key::Left),
        CODE_RIGHT => Some(Key::Right),
        CODE_UP => Some(Key::Up),
        CODE_CTRL_C => Some(Key::CtrlC),
        c => char::from_u32(c).map(Key::Char),
    }
}

/// Lock-free single-slot mailbox with overwrite-on-write semantics.
#[derive(Debug, Default)]
pub struct KeySlot {
    cell: AtomicU32,
}

impl KeySlot {
    pub fn new() -> Self {
        Self {
            cell: AtomicU32::new(EMPTY),
        }
    }

    /// Publish a key, overwriting any unread previous value.
    pub fn publish(&self, key: Key) {
        self.cell.store(encode(key), Ordering::Release);
    }

    /// Consume and clear the latest key, if any.
    pub fn take(&self) -> Option<Key> {
        decode(self.cell.swap(EMPTY, Ordering::AcqRel))
    }
}

/// Handle to the capture thread.
pub struct InputListener {
    slot: Arc<KeySlot>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputListener {
    /// Start capturing key presses. The terminal must already be in raw
    /// mode for per-keystroke delivery.
    pub fn spawn() -> Self {
        let slot = Arc::new(KeySlot::new());
        let stop = Arc::new(AtomicBool::new(false));

        let thread_slot = Arc::clone(&slot);
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            capture_loop(&thread_slot, &thread_stop);
        });

        Self {
            slot,
            stop,
            handle: Some(handle),
        }
    }

    /// Consume and clear the most recent key press.
    pub fn take_key(&self) -> Option<Key> {
        self.slot.take()
    }

    /// Ask the capture thread to stop and wait for it.
    pub fn shutdown(mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn capture_loop(slot: &KeySlot, stop: &AtomicBool) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(k) = key_from_event(key) {
                        slot.publish(k);
                    }
                }
                Ok(_) => {}
                // Stream fault: exit quietly, the loop just sees no input.
                Err(_) => break,
            },
            Ok(false) => {}
            Err(_) => break,
        }
    }
}

/// Translate a terminal key event into a capturable key.
///
/// Line terminators are discarded so a stray Enter never counts as a key
/// press. Any other printable character is accepted into the slot even if
/// it maps to no game action.
fn key_from_event(key: KeyEvent) -> Option<Key> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Key::CtrlC);
    }
    match key.code {
        KeyCode::Char('\r') | KeyCode::Char('\n') | KeyCode::Enter => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        _ => None,
    }
}
