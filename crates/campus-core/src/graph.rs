// Rust guideline compliant 2026-02-06

//! Task graph module: the arena of tasks, their tree structure, and their
//! assignments.
//!
//! Tasks are held in an arena keyed by id; the parent link is a lookup key,
//! never a live reference, so deletion cannot dangle and cycle detection is
//! an id-chain walk. Incremental operations walk the ancestor chain; a full
//! petgraph acyclicity pass guards the forest when it is rebuilt from
//! persisted records.

use crate::access::{self, Caller, Capability};
use crate::fsm::TransitionActor;
use crate::models::{now_timestamp, Assignment, Role, Status, Task};
use crate::roster::Roster;
use crate::{Error, Result};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Arena of tasks and their active assignments.
pub struct TaskGraph {
    /// Tasks keyed by id.
    tasks: HashMap<String, Task>,
    /// Active assignments keyed by task id. At most one per task.
    assignments: HashMap<String, Assignment>,
}

impl TaskGraph {
    /// Creates an empty task graph.
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            assignments: HashMap::new(),
        }
    }

    /// Rebuilds the graph from persisted records.
    ///
    /// # Arguments
    ///
    /// * `tasks` - Task records
    /// * `assignments` - Assignment records
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A task fails validation or collides on id
    /// - A parent reference points at a missing task
    /// - The parent links form a cycle
    /// - An assignment references a missing task or duplicates another
    pub fn from_records(tasks: Vec<Task>, assignments: Vec<Assignment>) -> Result<Self> {
        let mut graph = Self::new();

        for task in tasks {
            task.validate()?;
            if graph.tasks.contains_key(&task.id) {
                return Err(Error::DuplicateId(task.id));
            }
            graph.tasks.insert(task.id.clone(), task);
        }

        for task in graph.tasks.values() {
            if let Some(parent_id) = &task.parent_id {
                if !graph.tasks.contains_key(parent_id) {
                    return Err(Error::Validation(format!(
                        "Task {} references missing parent {}",
                        task.id, parent_id
                    )));
                }
            }
        }

        graph.validate_forest()?;

        for assignment in assignments {
            if !graph.tasks.contains_key(&assignment.task_id) {
                return Err(Error::Validation(format!(
                    "Assignment references missing task {}",
                    assignment.task_id
                )));
            }
            if graph.assignments.contains_key(&assignment.task_id) {
                return Err(Error::DuplicateId(assignment.task_id));
            }
            graph
                .assignments
                .insert(assignment.task_id.clone(), assignment);
        }

        Ok(graph)
    }

    /// Checks the whole forest for parent-link cycles.
    fn validate_forest(&self) -> Result<()> {
        let mut petgraph = DiGraph::<&str, ()>::new();
        let mut id_to_node = HashMap::new();

        for id in self.tasks.keys() {
            let node = petgraph.add_node(id.as_str());
            id_to_node.insert(id.as_str(), node);
        }

        for task in self.tasks.values() {
            if let Some(parent_id) = &task.parent_id {
                if let (Some(&child), Some(&parent)) = (
                    id_to_node.get(task.id.as_str()),
                    id_to_node.get(parent_id.as_str()),
                ) {
                    petgraph.add_edge(child, parent, ());
                }
            }
        }

        if is_cyclic_directed(&petgraph) {
            // Recover the offending chain with the id walk.
            for id in self.tasks.keys() {
                if let Err(err @ Error::CycleDetected(_)) = self.ancestor_chain(id) {
                    return Err(err);
                }
            }
            return Err(Error::CycleDetected(vec!["cycle_detected".to_string()]));
        }

        Ok(())
    }

    /// Walks the ancestor chain starting at a task id.
    ///
    /// # Returns
    ///
    /// The chain of task ids from `start` up to its root, inclusive.
    ///
    /// # Errors
    ///
    /// Returns `CycleDetected` with the visited chain if an id repeats.
    pub fn ancestor_chain(&self, start: &str) -> Result<Vec<String>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(start.to_string());

        while let Some(id) = current {
            if !seen.insert(id.clone()) {
                chain.push(id);
                return Err(Error::CycleDetected(chain));
            }
            current = self
                .tasks
                .get(&id)
                .and_then(|task| task.parent_id.clone());
            chain.push(id);
        }

        Ok(chain)
    }

    /// Returns whether a task lies inside an identity's own-created subtree.
    ///
    /// True when the task itself or any of its ancestors was created by
    /// `owner_id`.
    pub fn owns_subtree(&self, owner_id: &str, task_id: &str) -> bool {
        match self.ancestor_chain(task_id) {
            Ok(chain) => chain.iter().any(|id| {
                self.tasks
                    .get(id)
                    .is_some_and(|task| task.created_by == owner_id)
            }),
            Err(_) => false,
        }
    }

    /// Rejects callers that may not modify the given task as its owner.
    ///
    /// Admins own everything; faculty own their own-created subtrees.
    fn require_ownership(&self, caller: &Caller, task_id: &str) -> Result<()> {
        if caller.role == Role::Admin {
            return Ok(());
        }
        if self.owns_subtree(&caller.id, task_id) {
            return Ok(());
        }
        Err(Error::PermissionDenied(format!(
            "{} does not own task {}",
            caller.id, task_id
        )))
    }

    /// Creates a task, optionally under a parent.
    ///
    /// The capability check runs before any state is read. Id collisions are
    /// resolved by regenerating the hash id with a nonce.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller
    /// * `task` - The task to insert
    ///
    /// # Returns
    ///
    /// The id of the created task.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller lacks the create capability
    /// - The task fails validation
    /// - The parent does not exist
    /// - The parent chain is cyclic or would reach the new task
    /// - A faculty caller targets a parent outside their own subtree
    pub fn create_task(&mut self, caller: &Caller, mut task: Task) -> Result<String> {
        access::require(caller, Capability::CreateTask)?;
        task.validate()?;

        if caller.role != Role::Admin && task.created_by != caller.id {
            return Err(Error::PermissionDenied(format!(
                "{} cannot create a task on behalf of {}",
                caller.id, task.created_by
            )));
        }

        if let Some(parent_id) = task.parent_id.clone() {
            if !self.tasks.contains_key(&parent_id) {
                return Err(Error::NotFound(parent_id));
            }
            if caller.role == Role::Faculty {
                self.require_ownership(caller, &parent_id)?;
            }
            let chain = self.ancestor_chain(&parent_id)?;
            if chain.contains(&task.id) {
                let mut cycle = chain;
                cycle.push(task.id.clone());
                return Err(Error::CycleDetected(cycle));
            }
        }

        let mut nonce = 1u32;
        while self.tasks.contains_key(&task.id) {
            task.id =
                crate::ids::generate_id(&task.title, &task.created_by, task.created_at, nonce);
            nonce = nonce.saturating_add(1);
        }

        let id = task.id.clone();
        self.tasks.insert(id.clone(), task);
        Ok(id)
    }

    /// Moves a task under a new parent, or to the root when `new_parent` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller lacks the modify capability or subtree ownership
    /// - The task or the new parent does not exist
    /// - The move would make the task its own ancestor
    pub fn reparent(
        &mut self,
        caller: &Caller,
        task_id: &str,
        new_parent: Option<&str>,
    ) -> Result<()> {
        access::require(caller, Capability::ModifyTask)?;

        if !self.tasks.contains_key(task_id) {
            return Err(Error::NotFound(task_id.to_string()));
        }
        self.require_ownership(caller, task_id)?;

        if let Some(parent_id) = new_parent {
            if !self.tasks.contains_key(parent_id) {
                return Err(Error::NotFound(parent_id.to_string()));
            }
            if caller.role == Role::Faculty {
                self.require_ownership(caller, parent_id)?;
            }
            let chain = self.ancestor_chain(parent_id)?;
            if chain.iter().any(|id| id == task_id) {
                let mut cycle = chain;
                cycle.push(task_id.to_string());
                return Err(Error::CycleDetected(cycle));
            }
        }

        if let Some(task) = self.tasks.get_mut(task_id) {
            task.parent_id = new_parent.map(|id| id.to_string());
            task.updated_at = now_timestamp();
        }
        Ok(())
    }

    /// Assigns a task to a student, replacing any existing assignment.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller
    /// * `task_id` - The task to assign
    /// * `student_id` - The assignee
    /// * `roster` - Identity store used to validate the assignee
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller lacks the assign capability or subtree ownership
    /// - The task does not exist
    /// - The student is unknown, deactivated, or not a student
    pub fn assign(
        &mut self,
        caller: &Caller,
        task_id: &str,
        student_id: &str,
        roster: &Roster,
    ) -> Result<()> {
        access::require(caller, Capability::AssignTask)?;

        if !self.tasks.contains_key(task_id) {
            return Err(Error::NotFound(task_id.to_string()));
        }
        if caller.role == Role::Faculty {
            self.require_ownership(caller, task_id)?;
        }

        let student = roster.get_active(student_id)?;
        if student.role != Role::Student {
            return Err(Error::Validation(format!(
                "{} is not a student",
                student_id
            )));
        }

        self.assignments.insert(
            task_id.to_string(),
            Assignment {
                task_id: task_id.to_string(),
                student_id: student_id.to_string(),
                assigned_at: now_timestamp(),
            },
        );
        if let Some(task) = self.tasks.get_mut(task_id) {
            task.updated_at = now_timestamp();
        }
        Ok(())
    }

    /// Transitions a task's status on behalf of the caller.
    ///
    /// The caller's capability is checked before any state is read. The
    /// actor driving the FSM is then resolved: admins and subtree-owning
    /// faculty act as owner, the assigned student acts as assignee, anyone
    /// else is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller lacks the transition capability for their role
    /// - The task does not exist
    /// - The caller is neither owner nor assignee
    /// - The transition violates the FSM rules
    pub fn transition(&mut self, caller: &Caller, task_id: &str, new_status: Status) -> Result<()> {
        let capability = match caller.role {
            Role::Student => Capability::TransitionAssignedTask,
            Role::Faculty | Role::Admin => Capability::ModifyTask,
        };
        access::require(caller, capability)?;

        if !self.tasks.contains_key(task_id) {
            return Err(Error::NotFound(task_id.to_string()));
        }

        let is_assignee = self
            .assignments
            .get(task_id)
            .is_some_and(|assignment| assignment.student_id == caller.id);

        let actor = match caller.role {
            Role::Admin => TransitionActor::Owner,
            Role::Faculty if self.owns_subtree(&caller.id, task_id) => TransitionActor::Owner,
            _ if is_assignee => TransitionActor::Assignee,
            _ => {
                return Err(Error::PermissionDenied(format!(
                    "{} is neither owner nor assignee of task {}",
                    caller.id, task_id
                )))
            }
        };

        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| Error::NotFound(task_id.to_string()))?;
        crate::fsm::validate_transition(task, new_status, actor)?;
        task.status = new_status;
        task.updated_at = now_timestamp();
        Ok(())
    }

    /// Deletes a task, cascading to all descendant subtasks and their
    /// assignments.
    ///
    /// # Returns
    ///
    /// The ids of every removed task, the target first.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the delete capability or subtree
    /// ownership, or the task does not exist.
    pub fn delete_task(&mut self, caller: &Caller, task_id: &str) -> Result<Vec<String>> {
        access::require(caller, Capability::DeleteTask)?;

        if !self.tasks.contains_key(task_id) {
            return Err(Error::NotFound(task_id.to_string()));
        }
        if caller.role == Role::Faculty {
            self.require_ownership(caller, task_id)?;
        }

        let removed = self.collect_subtree(task_id);
        for id in &removed {
            self.tasks.remove(id);
            self.assignments.remove(id);
        }
        Ok(removed)
    }

    /// Collects a task id and all of its descendants, breadth-first.
    fn collect_subtree(&self, task_id: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut queue = VecDeque::from([task_id.to_string()]);

        while let Some(id) = queue.pop_front() {
            for task in self.tasks.values() {
                if task.parent_id.as_deref() == Some(id.as_str()) {
                    queue.push_back(task.id.clone());
                }
            }
            result.push(id);
        }

        result
    }

    /// Returns the direct and transitive subtasks of a task.
    pub fn descendants(&self, task_id: &str) -> Vec<String> {
        self.collect_subtree(task_id)
            .into_iter()
            .skip(1)
            .collect()
    }

    /// Returns tasks in a category. Lazy, restartable, case-insensitive.
    pub fn list_by_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Task> + 'a {
        let needle = category.to_lowercase();
        self.tasks
            .values()
            .filter(move |task| task.category.to_lowercase() == needle)
    }

    /// Returns tasks currently assigned to a student. Lazy and restartable.
    pub fn list_for_student<'a>(&'a self, student_id: &str) -> impl Iterator<Item = &'a Task> + 'a {
        let student_id = student_id.to_string();
        self.tasks.values().filter(move |task| {
            self.assignments
                .get(&task.id)
                .is_some_and(|assignment| assignment.student_id == student_id)
        })
    }

    /// Returns a task by id.
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns the active assignment for a task, if any.
    pub fn assignment(&self, task_id: &str) -> Option<&Assignment> {
        self.assignments.get(task_id)
    }

    /// Returns all tasks.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Returns all active assignments.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.values()
    }

    /// Returns the number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the graph holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns task persistence records, sorted by id for stable files.
    pub fn task_records(&self) -> Vec<Task> {
        let mut records: Vec<Task> = self.tasks.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    /// Returns assignment persistence records, sorted by task id.
    pub fn assignment_records(&self) -> Vec<Assignment> {
        let mut records: Vec<Assignment> = self.assignments.values().cloned().collect();
        records.sort_by(|a, b| a.task_id.cmp(&b.task_id));
        records
    }
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self::new()
    }
}
