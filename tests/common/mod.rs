// Test doubles shared by the renderer and frame loop tests.

#![allow(dead_code)]

use field_core::{Bounds, FieldError, Scheduler, Surface2d};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    SetSize(&'static str, Bounds),
    Clear(&'static str, f64, f64),
    BeginPath(&'static str),
    Arc(&'static str, f64, f64, f64),
    FillStyle(&'static str, String),
    Fill(&'static str),
    Blit { dst: &'static str, src: &'static str },
}

pub type OpLog = Rc<RefCell<Vec<Op>>>;

/// Surface that records every call into a log shared with its sibling.
pub struct RecordingSurface {
    pub name: &'static str,
    pub size: Bounds,
    pub log: OpLog,
}

impl RecordingSurface {
    pub fn pair(bounds: Bounds) -> (Self, Self, OpLog) {
        let log: OpLog = Rc::new(RefCell::new(Vec::new()));
        let visible = Self {
            name: "visible",
            size: bounds,
            log: log.clone(),
        };
        let offscreen = Self {
            name: "offscreen",
            size: Bounds::default(),
            log: log.clone(),
        };
        (visible, offscreen, log)
    }
}

impl Surface2d for RecordingSurface {
    fn size(&self) -> Bounds {
        self.size
    }

    fn set_size(&mut self, bounds: Bounds) {
        self.size = bounds;
        self.log.borrow_mut().push(Op::SetSize(self.name, bounds));
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, width: f64, height: f64) {
        self.log.borrow_mut().push(Op::Clear(self.name, width, height));
    }

    fn begin_path(&mut self) {
        self.log.borrow_mut().push(Op::BeginPath(self.name));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.log.borrow_mut().push(Op::Arc(self.name, x, y, radius));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.log
            .borrow_mut()
            .push(Op::FillStyle(self.name, style.to_string()));
    }

    fn fill(&mut self) {
        self.log.borrow_mut().push(Op::Fill(self.name));
    }

    fn draw_surface(&mut self, src: &Self, _dx: f64, _dy: f64) {
        self.log.borrow_mut().push(Op::Blit {
            dst: self.name,
            src: src.name,
        });
    }
}

/// Scheduler that queues callbacks until the test pumps them.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
    pub refuse: RefCell<bool>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the oldest queued callback; false when nothing was queued.
    pub fn run_next(&self) -> bool {
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<(), FieldError> {
        if *self.refuse.borrow() {
            return Err(FieldError::Schedule("refused".into()));
        }
        self.queue.borrow_mut().push_back(callback);
        Ok(())
    }
}
