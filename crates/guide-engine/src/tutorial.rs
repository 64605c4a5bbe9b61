//! Step-by-step tutorials.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TutorialError {
    #[error("unknown tutorial: {0}")]
    Unknown(String),

    #[error("tutorial {0} has no steps")]
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Illustration path, relative to the site root.
    pub image: String,
    pub text: String,
    /// Sketch to upload at this step, if any.
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub title: String,
    pub steps: Vec<Step>,
}

/// Tutorials by name.
#[derive(Debug, Clone, Default)]
pub struct TutorialCatalog {
    tutorials: BTreeMap<String, Tutorial>,
}

const BLINK_SKETCH: &str = "// Blink LED
void setup(){
  pinMode(13, OUTPUT);
}

void loop(){
  digitalWrite(13, HIGH);
  delay(1000);
  digitalWrite(13, LOW);
  delay(1000);
}";

impl TutorialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "led",
            Tutorial {
                title: "Blink LED".into(),
                steps: vec![
                    Step {
                        image: "Images/led-step1.png".into(),
                        text: "Step 1: Get an Arduino, LED, 220Ω resistor and wires.".into(),
                        code: None,
                    },
                    Step {
                        image: "Images/led-step2.png".into(),
                        text: "Step 2: Connect resistor to pin 13.".into(),
                        code: None,
                    },
                    Step {
                        image: "Images/led-step3.png".into(),
                        text: "Step 3: Connect LED to resistor and GND.".into(),
                        code: None,
                    },
                    Step {
                        image: "Images/led-step4.png".into(),
                        text: "Step 4: Upload this code.".into(),
                        code: Some(BLINK_SKETCH.into()),
                    },
                ],
            },
        );
        catalog
    }

    pub fn insert(&mut self, name: &str, tutorial: Tutorial) {
        self.tutorials.insert(name.to_string(), tutorial);
    }

    pub fn get(&self, name: &str) -> Option<&Tutorial> {
        self.tutorials.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tutorials.keys().map(String::as_str)
    }
}

/// Position within one tutorial.
#[derive(Debug, Clone)]
pub struct Stepper {
    tutorial: Tutorial,
    current: usize,
}

impl Stepper {
    /// Start `name` at its first step.
    pub fn load(catalog: &TutorialCatalog, name: &str) -> Result<Self, TutorialError> {
        let tutorial = catalog
            .get(name)
            .ok_or_else(|| TutorialError::Unknown(name.to_string()))?;
        if tutorial.steps.is_empty() {
            return Err(TutorialError::Empty(name.to_string()));
        }
        Ok(Self {
            tutorial: tutorial.clone(),
            current: 0,
        })
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    /// Zero-based index of the current step.
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.tutorial.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutorial.steps.is_empty()
    }

    pub fn step(&self) -> &Step {
        &self.tutorial.steps[self.current]
    }

    /// Advance one step. Returns false on the last step.
    pub fn next_step(&mut self) -> bool {
        if self.current + 1 < self.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn prev_step(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a zero-based step, clamped to the last one.
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.len() - 1);
    }

    /// e.g. `Blink LED – Step 1`
    pub fn heading(&self) -> String {
        format!("{} – Step {}", self.tutorial.title, self.current + 1)
    }

    /// e.g. `Step 1 / 4`
    pub fn counter(&self) -> String {
        format!("Step {} / {}", self.current + 1, self.len())
    }
}
