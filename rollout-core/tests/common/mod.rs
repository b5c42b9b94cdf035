//! Shared fixtures: a deterministic corridor environment, counting
//! agents, and a transition store that exposes what was pushed to it.
#![allow(dead_code)]
use anyhow::Result;
use rollout_core::record::Record;
use rollout_core::{
    Act, Agent, Configurable, Env, ExperienceBufferBase, Info, Obs, Policy, RecurrentAgent,
    ReplayBufferBase, Step, Transition,
};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, path::Path, rc::Rc};

#[derive(Clone, Debug)]
pub struct PosObs(pub f32);

impl Obs for PosObs {}

#[derive(Clone, Debug)]
pub struct MoveAct(pub f32);

impl Act for MoveAct {}

/// How the environment reports the time-limit flag at the limit.
///
/// `Missing` and `Both` simulate environments breaking their contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlagMode {
    Normal,
    Missing,
    Both,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnvCounters {
    pub resets: usize,
    pub steps: usize,
}

#[derive(Clone, Debug)]
pub struct CorridorConfig {
    pub max_episode_steps: usize,

    /// The environment terminates on its own at this episode length.
    pub terminate_at: Option<usize>,

    /// Reward of every step.
    pub reward: f32,

    pub flag_mode: FlagMode,

    /// Shared with the test body, to observe an environment instance
    /// built inside the trainer or evaluator.
    pub counters: Rc<RefCell<EnvCounters>>,
}

impl CorridorConfig {
    pub fn new(max_episode_steps: usize) -> Self {
        Self {
            max_episode_steps,
            terminate_at: None,
            reward: 1.0,
            flag_mode: FlagMode::Normal,
            counters: Rc::new(RefCell::new(EnvCounters::default())),
        }
    }

    pub fn terminate_at(mut self, len: usize) -> Self {
        self.terminate_at = Some(len);
        self
    }

    pub fn reward(mut self, reward: f32) -> Self {
        self.reward = reward;
        self
    }

    pub fn flag_mode(mut self, flag_mode: FlagMode) -> Self {
        self.flag_mode = flag_mode;
        self
    }
}

pub struct TimeLimitInfo(pub Option<bool>);

impl Info for TimeLimitInfo {
    fn truncated_at_limit(&self) -> Option<bool> {
        self.0
    }
}

/// A corridor the agent walks through, one cell per step.
///
/// Episodes end by termination at `terminate_at` steps, by truncation at
/// `max_episode_steps`, or both when the two coincide (the environment
/// then reports termination, as a time-limit wrapper would).
#[derive(Debug)]
pub struct CorridorEnv {
    config: CorridorConfig,
    count_steps: usize,
    rng: fastrand::Rng,
}

impl Env for CorridorEnv {
    type Config = CorridorConfig;
    type Obs = PosObs;
    type Act = MoveAct;
    type Info = TimeLimitInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            count_steps: 0,
            rng: fastrand::Rng::with_seed(seed as u64),
        })
    }

    fn reset(&mut self) -> Result<PosObs> {
        self.config.counters.borrow_mut().resets += 1;
        self.count_steps = 0;
        Ok(PosObs(0.0))
    }

    fn step(&mut self, a: &MoveAct) -> Step<Self> {
        self.count_steps += 1;
        self.config.counters.borrow_mut().steps += 1;

        let at_limit = self.count_steps == self.config.max_episode_steps;
        let mut is_terminated = self.config.terminate_at == Some(self.count_steps);
        let info = match (at_limit, self.config.flag_mode) {
            (false, _) => TimeLimitInfo(None),
            (true, FlagMode::Normal) => TimeLimitInfo(Some(!is_terminated)),
            (true, FlagMode::Missing) => TimeLimitInfo(None),
            (true, FlagMode::Both) => {
                is_terminated = true;
                TimeLimitInfo(Some(true))
            }
        };

        Step::new(
            PosObs(self.count_steps as f32),
            a.clone(),
            self.config.reward,
            is_terminated,
            info,
        )
    }

    fn sample_act(&mut self) -> MoveAct {
        MoveAct(self.rng.f32())
    }

    fn max_episode_steps(&self) -> usize {
        self.config.max_episode_steps
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AgentCounters {
    pub updates: usize,
    pub train_samples: usize,
    pub eval_samples: usize,
}

/// A feedforward agent counting its interactions.
///
/// Clones share the counters, so samples drawn from evaluation copies
/// remain observable in the test body.
#[derive(Clone)]
pub struct TestAgent {
    pub params: Vec<f32>,
    train_mode: bool,
    pub counters: Rc<RefCell<AgentCounters>>,
}

impl TestAgent {
    pub fn new() -> Self {
        Self {
            params: vec![0.0],
            train_mode: true,
            counters: Rc::new(RefCell::new(AgentCounters::default())),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TestAgentConfig {
    pub init_param: f32,
}

impl Configurable for TestAgent {
    type Config = TestAgentConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            params: vec![config.init_param],
            train_mode: true,
            counters: Rc::new(RefCell::new(AgentCounters::default())),
        }
    }
}

impl Policy<CorridorEnv> for TestAgent {
    fn sample(&mut self, _obs: &PosObs) -> MoveAct {
        let mut counters = self.counters.borrow_mut();
        if self.train_mode {
            counters.train_samples += 1;
        } else {
            counters.eval_samples += 1;
        }
        MoveAct(self.params[0])
    }
}

impl<R: ReplayBufferBase> Agent<CorridorEnv, R> for TestAgent {
    fn train(&mut self) {
        self.train_mode = true;
    }

    fn eval(&mut self) {
        self.train_mode = false;
    }

    fn is_train(&self) -> bool {
        self.train_mode
    }

    fn update(&mut self, _batch: R::Batch) -> Record {
        self.counters.borrow_mut().updates += 1;
        self.params[0] += 1.0;
        Record::from_scalar("loss", 1.0)
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        let yaml = serde_yaml::to_string(&self.params)?;
        std::fs::write(path.join("params.yaml"), yaml)?;
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        let yaml = std::fs::read_to_string(path.join("params.yaml"))?;
        self.params = serde_yaml::from_str(&yaml)?;
        Ok(())
    }
}

/// A recurrent agent counting its interactions.
///
/// `hidden` grows by one per sampled action within an episode, `noise`
/// models mutable non-parameter state (an exploration-noise schedule)
/// advanced on every sample, and `acting_log` records which parameter
/// value produced each action.
#[derive(Clone)]
pub struct RecurrentTestAgent {
    pub params: Vec<f32>,
    pub hidden: usize,
    pub noise: f32,
    train_mode: bool,
    pub acting_log: Rc<RefCell<Vec<(bool, f32)>>>,
    pub counters: Rc<RefCell<AgentCounters>>,
}

impl RecurrentTestAgent {
    pub fn new() -> Self {
        Self {
            params: vec![0.0],
            hidden: 0,
            noise: 0.0,
            train_mode: true,
            acting_log: Rc::new(RefCell::new(vec![])),
            counters: Rc::new(RefCell::new(AgentCounters::default())),
        }
    }
}

impl Policy<CorridorEnv> for RecurrentTestAgent {
    fn sample(&mut self, _obs: &PosObs) -> MoveAct {
        self.hidden += 1;
        self.noise += 0.1;
        self.acting_log
            .borrow_mut()
            .push((self.train_mode, self.params[0]));
        let mut counters = self.counters.borrow_mut();
        if self.train_mode {
            counters.train_samples += 1;
        } else {
            counters.eval_samples += 1;
        }
        MoveAct(self.params[0])
    }
}

impl<R: ReplayBufferBase> Agent<CorridorEnv, R> for RecurrentTestAgent {
    fn train(&mut self) {
        self.train_mode = true;
    }

    fn eval(&mut self) {
        self.train_mode = false;
    }

    fn is_train(&self) -> bool {
        self.train_mode
    }

    fn update(&mut self, _batch: R::Batch) -> Record {
        self.counters.borrow_mut().updates += 1;
        self.params[0] += 1.0;
        Record::from_scalar("q_loss", self.params[0])
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        let yaml = serde_yaml::to_string(&self.params)?;
        std::fs::write(path.join("params.yaml"), yaml)?;
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        let yaml = std::fs::read_to_string(path.join("params.yaml"))?;
        self.params = serde_yaml::from_str(&yaml)?;
        Ok(())
    }
}

impl RecurrentAgent for RecurrentTestAgent {
    fn reset_hidden_state(&mut self) {
        self.hidden = 0;
    }

    fn sync_params(&mut self, other: &Self) {
        self.params = other.params.clone();
    }
}

#[derive(Clone, Debug)]
pub struct RecordingBufferConfig {
    pub batch_size: usize,

    /// Shared with the test body, to observe transitions pushed to a
    /// buffer built inside the trainer.
    pub store: Rc<RefCell<Vec<Transition<PosObs, MoveAct>>>>,
}

impl RecordingBufferConfig {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size,
            store: Rc::new(RefCell::new(vec![])),
        }
    }
}

/// A transition store keeping everything pushed to it.
#[derive(Debug)]
pub struct RecordingBuffer {
    batch_size: usize,
    store: Rc<RefCell<Vec<Transition<PosObs, MoveAct>>>>,
}

impl ExperienceBufferBase for RecordingBuffer {
    type Item = Transition<PosObs, MoveAct>;

    fn push(&mut self, tr: Self::Item) -> Result<()> {
        self.store.borrow_mut().push(tr);
        Ok(())
    }

    fn len(&self) -> usize {
        self.store.borrow().len()
    }
}

impl ReplayBufferBase for RecordingBuffer {
    type Config = RecordingBufferConfig;
    type Batch = Vec<Transition<PosObs, MoveAct>>;

    fn build(config: &Self::Config) -> Self {
        Self {
            batch_size: config.batch_size,
            store: config.store.clone(),
        }
    }

    fn ready_to_sample(&self) -> bool {
        self.store.borrow().len() >= self.batch_size
    }

    fn sample(&mut self) -> Result<Self::Batch> {
        let store = self.store.borrow();
        let n = store.len();
        Ok(store[n - self.batch_size..].to_vec())
    }
}

/// A recorder appending to shared storage, to compare what different
/// sinks received.
pub struct SharedRecorder {
    pub records: Rc<RefCell<Vec<Record>>>,
}

impl SharedRecorder {
    pub fn new() -> Self {
        Self {
            records: Rc::new(RefCell::new(vec![])),
        }
    }
}

impl rollout_core::record::Recorder for SharedRecorder {
    fn write(&mut self, record: Record) {
        self.records.borrow_mut().push(record);
    }
}
