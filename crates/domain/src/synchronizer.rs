use crate::{
    ExerciseService, ExerciseSummary, FetchStateCell, Group, HistorySection, HistoryService,
    NotificationSink, Operation, Settlement, synchronize,
};

/// Loads the muscle groups offered as filters.
pub async fn load_groups<S, C, N>(service: &S, groups: &mut C, notifier: &N) -> Settlement
where
    S: ExerciseService,
    C: FetchStateCell<Group>,
    N: NotificationSink + ?Sized,
{
    synchronize(groups, notifier, Operation::Groups, service.get_groups()).await
}

/// Replaces the exercise list by the exercises of `group`.
pub async fn sync_exercises<S, C, N>(
    service: &S,
    exercises: &mut C,
    group: &Group,
    notifier: &N,
) -> Settlement
where
    S: ExerciseService,
    C: FetchStateCell<ExerciseSummary>,
    N: NotificationSink + ?Sized,
{
    synchronize(
        exercises,
        notifier,
        Operation::Exercises,
        service.get_exercises_by_group(group),
    )
    .await
}

/// Replaces the history by the sections delivered by the remote system, without reordering them.
pub async fn sync_history<S, C, N>(service: &S, history: &mut C, notifier: &N) -> Settlement
where
    S: HistoryService,
    C: FetchStateCell<HistorySection>,
    N: NotificationSink + ?Sized,
{
    synchronize(history, notifier, Operation::History, service.get_history()).await
}
