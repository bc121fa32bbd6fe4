//! Task service: validation, status resolution, and store orchestration.

use super::{
    CreateTaskRequest, CreatedTask, ListTasksRequest, TaskListView, TaskView, UpdateTaskRequest,
};
use crate::error::{ServiceError, ServiceResult};
use crate::status::{
    domain::{Status, StatusId, StatusName},
    ports::StatusRepository,
};
use crate::task::{
    domain::{DayRange, NewTask, Task, TaskDescription, TaskPatch, TaskQuery, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::validation::{
    non_blank, parse_day_filter, parse_due_date, parse_last_id, parse_limit,
    parse_optional_due_date, parse_task_id,
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;

/// Task orchestration service.
///
/// Owns no state beyond shared handles, so clones are cheap and may be used
/// concurrently.
pub struct TaskService<T, S, C>
where
    T: TaskRepository,
    S: StatusRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    statuses: Arc<S>,
    clock: Arc<C>,
}

impl<T, S, C> Clone for TaskService<T, S, C>
where
    T: TaskRepository,
    S: StatusRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            statuses: Arc::clone(&self.statuses),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Status names used to label a page of tasks.
enum StatusLabels {
    /// Every row carries the filtered status.
    Single(String),
    /// Names keyed by id, extended on demand for statuses created mid-request.
    ById(HashMap<StatusId, String>),
}

impl<T, S, C> TaskService<T, S, C>
where
    T: TaskRepository,
    S: StatusRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, statuses: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            statuses,
            clock,
        }
    }

    /// Creates an active task in the named status.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for invalid input,
    /// [`ServiceError::StatusNameNotFound`] when the status does not exist,
    /// or [`ServiceError::Internal`] when a store fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> ServiceResult<CreatedTask> {
        let title = TaskTitle::new(&request.title)?;
        let description = TaskDescription::new(&request.description)?;
        let status_name = StatusName::new(&request.status_name)?;
        let due_date = parse_due_date(&request.date, self.clock.utc())?;

        let status = self.resolve_status_name(status_name).await?;
        let new_task = NewTask::new(title, description, status.id(), due_date, &*self.clock);

        let id = self
            .tasks
            .create(&new_task)
            .await
            .map_err(|err| ServiceError::internal("create task", &err))?;
        tracing::info!(task_id = %id, status_id = %status.id(), "task created");
        Ok(CreatedTask { id })
    }

    /// Soft-deletes an active task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for a malformed id,
    /// [`ServiceError::TaskNotFound`] when no active task has the id, or
    /// [`ServiceError::Internal`] when the store fails.
    pub async fn delete_task(&self, id: &str) -> ServiceResult<()> {
        let task_id = parse_task_id(id)?;
        self.tasks
            .soft_delete(task_id, self.clock.utc())
            .await
            .map_err(|err| classify_task_error("delete task", &err))?;
        tracing::info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    /// Overwrites the non-blank fields of `request` on an active task.
    ///
    /// A request with every field blank changes nothing but still fails when
    /// the task is missing or deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for invalid input,
    /// [`ServiceError::StatusNameNotFound`] for an unknown status,
    /// [`ServiceError::TaskNotFound`] when no active task has the id, or
    /// [`ServiceError::Internal`] when a store fails.
    pub async fn update_task(&self, id: &str, request: UpdateTaskRequest) -> ServiceResult<()> {
        let task_id = parse_task_id(id)?;
        let title = provided(request.title.as_deref())
            .map(TaskTitle::new)
            .transpose()?;
        let description = provided(request.description.as_deref())
            .map(TaskDescription::new)
            .transpose()?;
        let status_name = provided(request.status_name.as_deref())
            .map(StatusName::new)
            .transpose()?;
        let due_date = request
            .date
            .as_deref()
            .map(|raw| parse_optional_due_date(raw, self.clock.utc()))
            .transpose()?
            .flatten();

        let mut patch = TaskPatch::new();
        if let Some(value) = title {
            patch = patch.with_title(value);
        }
        if let Some(value) = description {
            patch = patch.with_description(value);
        }
        if let Some(name) = status_name {
            let status = self.resolve_status_name(name).await?;
            patch = patch.with_status_id(status.id());
        }
        if let Some(value) = due_date {
            patch = patch.with_due_date(value);
        }

        self.tasks
            .update_active(task_id, &patch)
            .await
            .map_err(|err| classify_task_error("update task", &err))?;
        tracing::info!(task_id = %task_id, unchanged = patch.is_empty(), "task updated");
        Ok(())
    }

    /// Returns an active task labelled with its status name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for a malformed id,
    /// [`ServiceError::TaskNotFound`] when no active task has the id,
    /// [`ServiceError::StatusIdNotFound`] when the task's status is missing,
    /// or [`ServiceError::Internal`] when a store fails.
    pub async fn get_task(&self, id: &str) -> ServiceResult<TaskView> {
        let task_id = parse_task_id(id)?;
        let task = self
            .tasks
            .find_active_by_id(task_id)
            .await
            .map_err(|err| classify_task_error("get task", &err))?
            .ok_or_else(|| {
                tracing::debug!(task_id = %task_id, "task not found");
                ServiceError::TaskNotFound(task_id)
            })?;
        let status = self.resolve_status_id(task.status_id()).await?;
        Ok(TaskView::new(&task, status.name().as_str()))
    }

    /// Lists one page of active tasks ordered by id.
    ///
    /// A status name filter labels every row with that status. Otherwise all
    /// statuses are fetched once and rows are labelled from that map.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for invalid pagination or date
    /// input, [`ServiceError::StatusNameNotFound`] for an unknown status
    /// filter, [`ServiceError::StatusIdNotFound`] when a row's status is
    /// missing, or [`ServiceError::Internal`] when a store fails.
    pub async fn list_tasks(&self, request: ListTasksRequest) -> ServiceResult<TaskListView> {
        let limit = parse_limit(&request.limit)?;
        let last_id = parse_last_id(&request.last_id)?;
        let mut query = TaskQuery::new().after(last_id).with_limit(limit);

        let mut labels = match non_blank(&request.status_name) {
            Some(raw) => {
                let status = self.resolve_status_name(StatusName::new(raw)?).await?;
                query = query.with_status_id(status.id());
                StatusLabels::Single(status.name().as_str().to_owned())
            }
            None => StatusLabels::ById(self.status_name_map().await?),
        };

        if let Some(day) = parse_day_filter(&request.date)? {
            query = query.due_on(DayRange::containing(day));
        }

        let tasks = self
            .tasks
            .list_active(&query)
            .await
            .map_err(|err| ServiceError::internal("list tasks", &err))?;

        let mut views = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let status_name = self.label_for(&mut labels, task).await?;
            views.push(TaskView::new(task, status_name));
        }
        Ok(TaskListView::from(views))
    }

    async fn resolve_status_name(&self, name: StatusName) -> ServiceResult<Status> {
        let found = self
            .statuses
            .find_by_name(&name)
            .await
            .map_err(|err| ServiceError::internal("find status by name", &err))?;
        found.ok_or_else(|| {
            tracing::debug!(status_name = %name, "status name not found");
            ServiceError::StatusNameNotFound(name.into_inner())
        })
    }

    async fn resolve_status_id(&self, id: StatusId) -> ServiceResult<Status> {
        let found = self
            .statuses
            .find_by_id(id)
            .await
            .map_err(|err| ServiceError::internal("find status by id", &err))?;
        found.ok_or_else(|| {
            tracing::debug!(status_id = %id, "status id not found");
            ServiceError::StatusIdNotFound(id)
        })
    }

    async fn status_name_map(&self) -> ServiceResult<HashMap<StatusId, String>> {
        let statuses = self
            .statuses
            .list_all()
            .await
            .map_err(|err| ServiceError::internal("list statuses", &err))?;
        Ok(statuses
            .into_iter()
            .map(|status| (status.id(), status.name().as_str().to_owned()))
            .collect())
    }

    async fn label_for(&self, labels: &mut StatusLabels, task: &Task) -> ServiceResult<String> {
        match labels {
            StatusLabels::Single(name) => Ok(name.clone()),
            StatusLabels::ById(names) => {
                if let Some(name) = names.get(&task.status_id()) {
                    return Ok(name.clone());
                }
                let status = self.resolve_status_id(task.status_id()).await?;
                let name = status.name().as_str().to_owned();
                names.insert(status.id(), name.clone());
                Ok(name)
            }
        }
    }
}

/// Treats absent and blank optional fields alike.
fn provided(raw: Option<&str>) -> Option<&str> {
    raw.and_then(non_blank)
}

fn classify_task_error(operation: &'static str, err: &TaskRepositoryError) -> ServiceError {
    match err {
        TaskRepositoryError::NotFound(id) => {
            tracing::debug!(task_id = %id, operation, "task not found");
            ServiceError::TaskNotFound(*id)
        }
        TaskRepositoryError::InvalidPersistedData(_) | TaskRepositoryError::Persistence(_) => {
            ServiceError::internal(operation, err)
        }
    }
}

