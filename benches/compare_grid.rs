use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use indoc::indoc;

use statesearch::algorithms::astar;
use statesearch::algorithms::breadth_first;
use statesearch::algorithms::depth_first;
use statesearch::algorithms::greedy_best_first;
use statesearch::algorithms::uniform_cost;
use statesearch::problem::Problem;
use statesearch::problems::grid::GridProblem;
use statesearch::problems::grid::ManhattanToGoal;
use statesearch::problems::grid::StraightLineToGoal;
use statesearch::search::Limits;

const OPEN_ROOM: &str = indoc! {"
    ####################
    #S.................#
    #.######.#########.#
    #.#......#.........#
    #.#.####.#.#######.#
    #.#.#....#.#.....#.#
    #.#.#.####.#.###.#.#
    #...#......#...#..G#
    ####################
"};

const CORRIDORS: &str = indoc! {"
    ##############
    #S#........#G#
    #.#.######.#.#
    #.#.#....#.#.#
    #.#.#.##.#.#.#
    #...#.##...#.#
    #####.######.#
    #............#
    ##############
"};

fn compare_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Search");

    for (name, text) in [("open_room", OPEN_ROOM), ("corridors", CORRIDORS)] {
        let problem = GridProblem::try_from(text).unwrap();

        group.bench_with_input(BenchmarkId::new("BFS", name), &problem, |b, p| {
            b.iter(|| breadth_first(p, p.initial_state(), Limits::none()))
        });
        group.bench_with_input(BenchmarkId::new("DFS", name), &problem, |b, p| {
            b.iter(|| depth_first(p, p.initial_state(), Limits::none()))
        });
        group.bench_with_input(BenchmarkId::new("UCS", name), &problem, |b, p| {
            b.iter(|| uniform_cost(p, p.initial_state(), Limits::none()))
        });
        group.bench_with_input(BenchmarkId::new("A*/manhattan", name), &problem, |b, p| {
            b.iter(|| astar::<ManhattanToGoal, _, _, _, _>(p, p.initial_state(), Limits::none()))
        });
        group.bench_with_input(
            BenchmarkId::new("A*/straight-line", name),
            &problem,
            |b, p| {
                b.iter(|| {
                    astar::<StraightLineToGoal, _, _, _, _>(p, p.initial_state(), Limits::none())
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("Greedy/manhattan", name),
            &problem,
            |b, p| {
                b.iter(|| {
                    greedy_best_first::<ManhattanToGoal, _, _, _, _>(
                        p,
                        p.initial_state(),
                        Limits::none(),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, compare_drivers);
criterion_main!(benches);
