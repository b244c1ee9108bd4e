//! Recording engine for unit tests.
//!
//! Every lifecycle call is appended to the shared log in `MockOptions`, so
//! tests can assert on exact ordering.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::container::Container;
use crate::error::BoxError;
use crate::primitives::{
    CustomKeyEventHandler, KeyCallback, RenderCallback, ResizeCallback, ScrollCallback,
    StrCallback, VoidCallback,
};
use crate::state::keyboard::KeyboardEvent;
use crate::types::{KeyEvent, RenderEvent, ResizeEvent};
use super::{Addon, Emitter, Engine, Subscription};

pub(crate) type Log = Rc<RefCell<Vec<String>>>;

#[derive(Clone)]
pub(crate) struct MockOptions {
    pub cols: u16,
    pub rows: u16,
    pub log: Log,
    pub fail_create: bool,
    pub fail_open: bool,
    /// Shared switch: once set, every later `open` fails.
    pub fail_open_later: Rc<Cell<bool>>,
    /// Leave handlers registered on dispose, like an engine that leaks them.
    pub keep_handlers_on_dispose: bool,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            log: Rc::new(RefCell::new(Vec::new())),
            fail_create: false,
            fail_open: false,
            fail_open_later: Rc::new(Cell::new(false)),
            keep_handlers_on_dispose: false,
        }
    }
}

pub(crate) struct MockEngine {
    options: MockOptions,
    size: Cell<(u16, u16)>,
    focused: Cell<bool>,
    disposed: Cell<bool>,
    written: RefCell<String>,
    key_handler: RefCell<Option<CustomKeyEventHandler>>,
    addons: RefCell<Vec<Rc<dyn Addon<MockEngine>>>>,
    dispose_hooks: RefCell<Vec<Box<dyn FnOnce()>>>,

    binary: Emitter<str>,
    cursor_move: Emitter<()>,
    data: Emitter<str>,
    key: Emitter<KeyEvent>,
    line_feed: Emitter<()>,
    scroll: Emitter<usize>,
    selection_change: Emitter<()>,
    render: Emitter<RenderEvent>,
    resize: Emitter<ResizeEvent>,
    title_change: Emitter<str>,
}

impl MockEngine {
    fn log(&self, entry: impl Into<String>) {
        self.options.log.borrow_mut().push(entry.into());
    }

    fn void(handler: VoidCallback) -> Rc<dyn Fn(&())> {
        Rc::new(move |_: &()| handler())
    }

    pub fn fire_data(&self, data: &str) {
        self.data.fire(data);
    }

    pub fn fire_binary(&self, data: &str) {
        self.binary.fire(data);
    }

    pub fn fire_title(&self, title: &str) {
        self.title_change.fire(title);
    }

    pub fn fire_cursor_move(&self) {
        self.cursor_move.fire(&());
    }

    pub fn fire_line_feed(&self) {
        self.line_feed.fire(&());
    }

    pub fn fire_selection_change(&self) {
        self.selection_change.fire(&());
    }

    pub fn fire_scroll(&self, position: usize) {
        self.scroll.fire(&position);
    }

    pub fn fire_render(&self, start: usize, end: usize) {
        self.render.fire(&RenderEvent { start, end });
    }

    pub fn fire_resize(&self, cols: u16, rows: u16) {
        self.resize.fire(&ResizeEvent { cols, rows });
    }

    /// Feed a key through the interceptor. Returns whether the engine
    /// processed it (and fired `on_key`). Accepts crossterm key events too.
    pub fn press_key(&self, event: impl Into<KeyboardEvent>) -> bool {
        let event = event.into();
        let handler = self.key_handler.borrow().clone();
        if let Some(handler) = handler {
            if !handler(&event) {
                return false;
            }
        }
        self.key.fire(&KeyEvent::new(event.key.clone(), event));
        true
    }

    pub fn handler_count(&self) -> usize {
        self.binary.len()
            + self.cursor_move.len()
            + self.data.len()
            + self.key.len()
            + self.line_feed.len()
            + self.scroll.len()
            + self.selection_change.len()
            + self.render.len()
            + self.resize.len()
            + self.title_change.len()
    }

    pub fn on_dispose(&self, hook: impl FnOnce() + 'static) {
        self.dispose_hooks.borrow_mut().push(Box::new(hook));
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    pub fn written(&self) -> String {
        self.written.borrow().clone()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size.get()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }
}

impl fmt::Debug for MockEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockEngine")
            .field("size", &self.size.get())
            .field("disposed", &self.disposed.get())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl Engine for MockEngine {
    type Options = MockOptions;

    fn create(options: MockOptions) -> Result<Self, BoxError> {
        if options.fail_create {
            return Err("engine construction failed".into());
        }
        let engine = Self {
            size: Cell::new((options.cols, options.rows)),
            options,
            focused: Cell::new(false),
            disposed: Cell::new(false),
            written: RefCell::new(String::new()),
            key_handler: RefCell::new(None),
            addons: RefCell::new(Vec::new()),
            dispose_hooks: RefCell::new(Vec::new()),
            binary: Emitter::new(),
            cursor_move: Emitter::new(),
            data: Emitter::new(),
            key: Emitter::new(),
            line_feed: Emitter::new(),
            scroll: Emitter::new(),
            selection_change: Emitter::new(),
            render: Emitter::new(),
            resize: Emitter::new(),
            title_change: Emitter::new(),
        };
        let (cols, rows) = engine.size.get();
        engine.log(format!("create {cols}x{rows}"));
        Ok(engine)
    }

    fn open(&self, container: &Container) -> Result<(), BoxError> {
        self.log(format!("open {}", container.id()));
        if self.options.fail_open || self.options.fail_open_later.get() {
            return Err("container is not attachable".into());
        }
        Ok(())
    }

    fn on_binary(&self, handler: StrCallback) -> Subscription {
        self.log("on_binary");
        self.binary.subscribe(handler)
    }

    fn on_cursor_move(&self, handler: VoidCallback) -> Subscription {
        self.log("on_cursor_move");
        self.cursor_move.subscribe(Self::void(handler))
    }

    fn on_data(&self, handler: StrCallback) -> Subscription {
        self.log("on_data");
        self.data.subscribe(handler)
    }

    fn on_key(&self, handler: KeyCallback) -> Subscription {
        self.log("on_key");
        self.key.subscribe(handler)
    }

    fn on_line_feed(&self, handler: VoidCallback) -> Subscription {
        self.log("on_line_feed");
        self.line_feed.subscribe(Self::void(handler))
    }

    fn on_scroll(&self, handler: ScrollCallback) -> Subscription {
        self.log("on_scroll");
        self.scroll.subscribe(Rc::new(move |position: &usize| handler(*position)))
    }

    fn on_selection_change(&self, handler: VoidCallback) -> Subscription {
        self.log("on_selection_change");
        self.selection_change.subscribe(Self::void(handler))
    }

    fn on_render(&self, handler: RenderCallback) -> Subscription {
        self.log("on_render");
        self.render.subscribe(handler)
    }

    fn on_resize(&self, handler: ResizeCallback) -> Subscription {
        self.log("on_resize");
        self.resize.subscribe(handler)
    }

    fn on_title_change(&self, handler: StrCallback) -> Subscription {
        self.log("on_title_change");
        self.title_change.subscribe(handler)
    }

    fn attach_custom_key_event_handler(&self, handler: CustomKeyEventHandler) {
        self.log("key_handler");
        *self.key_handler.borrow_mut() = Some(handler);
    }

    fn load_addon(&self, addon: Rc<dyn Addon<Self>>) -> Result<(), BoxError> {
        addon.activate(self)?;
        self.addons.borrow_mut().push(addon);
        Ok(())
    }

    fn dispose(&self) {
        self.log("dispose");
        self.disposed.set(true);

        let hooks: Vec<_> = self.dispose_hooks.borrow_mut().drain(..).collect();
        for hook in hooks {
            hook();
        }

        let addons: Vec<_> = self.addons.borrow_mut().drain(..).collect();
        for addon in addons {
            addon.dispose();
        }

        if !self.options.keep_handlers_on_dispose {
            self.binary.clear();
            self.cursor_move.clear();
            self.data.clear();
            self.key.clear();
            self.line_feed.clear();
            self.scroll.clear();
            self.selection_change.clear();
            self.render.clear();
            self.resize.clear();
            self.title_change.clear();
        }
        *self.key_handler.borrow_mut() = None;
    }

    fn write(&self, data: &str) {
        self.written.borrow_mut().push_str(data);
    }

    fn resize(&self, cols: u16, rows: u16) {
        self.size.set((cols, rows));
    }

    fn focus(&self) {
        self.focused.set(true);
    }

    fn blur(&self) {
        self.focused.set(false);
    }

    fn clear(&self) {
        self.written.borrow_mut().clear();
    }
}

// =============================================================================
// Addon
// =============================================================================

pub(crate) struct MockAddon {
    name: &'static str,
    log: Log,
    fail: bool,
}

impl MockAddon {
    pub fn new(name: &'static str, log: &Log) -> Rc<dyn Addon<MockEngine>> {
        Rc::new(Self { name, log: log.clone(), fail: false })
    }

    pub fn failing(name: &'static str, log: &Log) -> Rc<dyn Addon<MockEngine>> {
        Rc::new(Self { name, log: log.clone(), fail: true })
    }
}

impl Addon<MockEngine> for MockAddon {
    fn activate(&self, _engine: &MockEngine) -> Result<(), BoxError> {
        self.log.borrow_mut().push(format!("activate {}", self.name));
        if self.fail {
            return Err(format!("{} failed to activate", self.name).into());
        }
        Ok(())
    }

    fn dispose(&self) {
        self.log.borrow_mut().push(format!("dispose {}", self.name));
    }
}
