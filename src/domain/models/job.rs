// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;

/// 抓取任务
///
/// 名称唯一，同时作为输出目录名；提交后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub page_urls: Vec<String>,
}

impl Job {
    pub fn new(name: impl Into<String>, page_urls: Vec<String>) -> Self {
        Self {
            name: name.into(),
            page_urls,
        }
    }
}

/// 任务状态
///
/// `Received → DirectoryReserved → Running(N) → Completed`，
/// 准入检查失败时 `Received → Rejected`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Received,
    DirectoryReserved,
    /// 尚未结束的页面任务数
    Running { outstanding: usize },
    Completed,
    Rejected,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Received => write!(f, "received"),
            JobState::DirectoryReserved => write!(f, "directory_reserved"),
            JobState::Running { outstanding } => write!(f, "running({})", outstanding),
            JobState::Completed => write!(f, "completed"),
            JobState::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid job state transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: JobState,
    pub to: JobState,
}

impl JobState {
    /// 检查状态转换是否合法
    pub fn can_transition_to(&self, next: &JobState) -> bool {
        match (self, next) {
            (JobState::Received, JobState::DirectoryReserved) => true,
            (JobState::Received, JobState::Rejected) => true,
            (JobState::DirectoryReserved, JobState::Running { .. }) => true,
            // A page task finished
            (JobState::Running { outstanding }, JobState::Running { outstanding: remaining }) => {
                *outstanding > 0 && *remaining == *outstanding - 1
            }
            (JobState::Running { outstanding: 0 }, JobState::Completed) => true,
            _ => false,
        }
    }
}

/// 任务生命周期
///
/// 记录当前状态并拒绝非法转换
#[derive(Debug)]
pub struct JobLifecycle {
    state: JobState,
}

impl Default for JobLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl JobLifecycle {
    pub fn new() -> Self {
        Self {
            state: JobState::Received,
        }
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn advance(&mut self, next: JobState) -> Result<JobState, InvalidTransition> {
        if !self.state.can_transition_to(&next) {
            return Err(InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(next)
    }

    /// 一个页面任务结束
    pub fn page_finished(&mut self) -> Result<JobState, InvalidTransition> {
        match self.state {
            JobState::Running { outstanding } if outstanding > 0 => {
                self.advance(JobState::Running {
                    outstanding: outstanding - 1,
                })
            }
            other => Err(InvalidTransition {
                from: other,
                to: JobState::Running { outstanding: 0 },
            }),
        }
    }
}
