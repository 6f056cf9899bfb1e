use super::PredecessorMap;
use crate::graph::Position;


/// Rebuild the ordered start-to-goal path by walking predecessor links
/// backward from the goal
/// Returns [start] when start and goal coincide, and the empty path when
/// the goal never received a predecessor (it was unreachable)
pub(crate) fn reconstruct_path(
    predecessors: &PredecessorMap,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    if goal == start {
        return vec![start];
    }
    if !predecessors.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = predecessors.get(&current) {
        path.push(parent);
        if parent == start {
            break;
        }
        current = parent;
    }

    // The walk collected goal first, so flip to start-to-goal order
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path() {
        let mut predecessors = PredecessorMap::default();
        predecessors.insert(1, 0);
        predecessors.insert(2, 1);
        predecessors.insert(3, 2);

        assert_eq!(reconstruct_path(&predecessors, 0, 3), vec![0, 1, 2, 3]);
        assert_eq!(reconstruct_path(&predecessors, 0, 1), vec![0, 1]);
    }

    #[test]
    fn test_reconstruct_path_start_is_goal() {
        let predecessors = PredecessorMap::default();
        assert_eq!(reconstruct_path(&predecessors, 5, 5), vec![5]);
    }

    #[test]
    fn test_reconstruct_path_unreached_goal_is_empty() {
        let mut predecessors = PredecessorMap::default();
        predecessors.insert(1, 0);
        assert!(reconstruct_path(&predecessors, 0, 9).is_empty());
    }
}
