//! Built-in formulas provided by petrocalc.

use crate::formula::PetroleumFormula;

// Reservoir volumetrics
pub mod material_balance;
pub mod material_balance_simplified;

// Flow in porous media & inflow performance
pub mod darcy_flow;
pub mod productivity_index;
pub mod vogel_ipr;

// Production forecasting
pub mod decline_curve;

// Fluid properties
pub mod pvt_standing;

/// One instance of every built-in formula.
pub fn all() -> Vec<Box<dyn PetroleumFormula>> {
    vec![
        Box::new(material_balance::MaterialBalance::new()),
        Box::new(material_balance_simplified::SimplifiedMaterialBalance::new()),
        Box::new(darcy_flow::DarcyFlow::new()),
        Box::new(productivity_index::ProductivityIndex::new()),
        Box::new(vogel_ipr::VogelIpr::new()),
        Box::new(decline_curve::DeclineCurve::new()),
        Box::new(pvt_standing::StandingCorrelation::new()),
    ]
}
