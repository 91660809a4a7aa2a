use petro_prelude::*;

#[test]
fn prelude_covers_a_full_calculation() {
    let calculator = FormulaCalculator::new();
    let inputs = FormulaInputs::new().with("N", 1.2e7).with("Bo", 1.2).with("Boi", 1.1);
    let np = calculator.calculate("material_balance_simplified", &inputs).unwrap();
    assert!((np - 1.0e6).abs() < 1e-3, "{np}");

    let err = calculator
        .calculate("material_balance_simplified", &FormulaInputs::new().with("Bo", 1.2))
        .unwrap_err();
    match err {
        CalculatorError::Formula(err) => assert_eq!(err.kind(), ErrorKind::InsufficientParameters),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn formulas_are_interchangeable_behind_the_trait() {
    let formulas: Vec<Box<dyn PetroleumFormula>> = vec![
        Box::new(DarcyFlow::new()),
        Box::new(DeclineCurve::new()),
        Box::new(MaterialBalance::new()),
        Box::new(ProductivityIndex::new()),
        Box::new(SimplifiedMaterialBalance::new()),
        Box::new(StandingCorrelation::new()),
        Box::new(VogelIpr::new()),
    ];
    let mut registry = FormulaRegistry::new();
    for formula in formulas {
        registry.register(formula);
    }
    assert_eq!(registry.len(), 7);
    let darcy = registry.get("darcy_flow").unwrap();
    assert_eq!(darcy.targets(), SolveTargets { forward: "Q", inverse: "k" });
    assert_eq!(
        darcy.descriptor(),
        &FormulaDescriptor::new("Darcy's Law", "Q = (k * A * ΔP) / (μ * L)")
    );
}
