use crate::model::query::ListQuery;
use crate::model::task::Task;

/// Whether a task passes the query's source and status criteria.
///
/// `completed` is the task's completion state, looked up once by the
/// caller. Search is evaluated separately (see `ops::search`); the
/// pipeline ANDs the two.
pub fn passes(task: &Task, query: &ListQuery, completed: bool) -> bool {
    query.allows_source(task.source) && query.allows_status(completed)
}
