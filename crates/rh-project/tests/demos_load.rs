use std::path::Path;

#[test]
fn demo_cases_load_and_run() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/cases");
    let demos = ["steel_plate.yaml"];

    for name in demos {
        let path = root.join(name);
        let file = rh_project::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        assert_eq!(file.cases.len(), 4);

        for case in &file.cases {
            let profile = rh_solver::solve(&case.to_problem())
                .unwrap_or_else(|e| panic!("Case {} in {} failed: {}", case.id, name, e));
            assert_eq!(profile.len(), case.to_problem().node_count());
        }

        let long_run = file.case("long-run").unwrap();
        let profile = rh_solver::solve(&long_run.to_problem()).unwrap();
        assert!(profile.steady_state_deviation() < 1e-6);
    }
}
