use std::rc::Rc;

use log::{debug, info};

use crate::color::{nb_colors, ColoringInstance, Colors, GraphColor};
use crate::search::dsatur::Dsatur;
use crate::search::lmxrlf::Lmxrlf;
use crate::search::tabucol::{tabucol, TabucolParams};

/** Hybrid algorithm: a constructive algorithm followed by TabuCol.
    1. builds a coloring with the constructor (c colors)
    2. runs TabuCol with c-1 colors, starting from the last feasible coloring
    3. if TabuCol succeeds, keep its coloring and repeat with one color less,
       otherwise return the last feasible coloring
Never uses more colors than the constructor alone.
*/
#[derive(Debug)]
pub struct Hybrid<C:GraphColor> {
    /// constructive algorithm
    constructor: C,
    /// TabuCol tunables (the seed is incremented at each round)
    params: TabucolParams,
    /// last coloring computed
    colors: Option<Colors>,
    /// number of colors after the constructor, then after each successful TabuCol round
    history: Vec<usize>,
}

/// DSATUR followed by TabuCol
pub type HybridDsatur = Hybrid<Dsatur>;

/// LMXRLF followed by TabuCol
pub type HybridLmxrlf = Hybrid<Lmxrlf>;

impl Hybrid<Dsatur> {
    /// creates a DSATUR + TabuCol solver with the default TabuCol tunables
    pub fn new(inst:Rc<dyn ColoringInstance>) -> Self {
        Self::with_constructor(Dsatur::new(inst), TabucolParams::default())
    }
}

impl Hybrid<Lmxrlf> {
    /// creates a LMXRLF + TabuCol solver with the default TabuCol tunables
    pub fn new(inst:Rc<dyn ColoringInstance>) -> Self {
        Self::with_constructor(Lmxrlf::new(inst), TabucolParams::default())
    }
}

impl<C:GraphColor> Hybrid<C> {
    /// creates a hybrid solver from any constructive algorithm
    pub fn with_constructor(constructor:C, params:TabucolParams) -> Self {
        Self { constructor, params, colors:None, history:Vec::new() }
    }

    /// number of colors after the constructor, then after each successful TabuCol round
    pub fn history(&self) -> &[usize] { &self.history }

    /// TabuCol tunables
    pub fn params(&self) -> &TabucolParams { &self.params }
}

impl<C:GraphColor> GraphColor for Hybrid<C> {
    fn name(&self) -> &'static str {
        match self.constructor.name() {
            "dsatur" => "hybrid_dsatur",
            "lmxrlf" => "hybrid_lmxrlf",
            _ => "hybrid",
        }
    }

    fn instance(&self) -> &Rc<dyn ColoringInstance> { self.constructor.instance() }

    fn color(&mut self) -> Colors {
        let inst = self.constructor.instance().clone();
        let mut best = self.constructor.color();
        let mut nb = nb_colors(&best);
        self.history = vec![nb];
        let mut round:u64 = 0;
        while nb >= 2 {
            let k = nb - 1;
            let params = TabucolParams {
                seed: self.params.seed.map(|s| s.wrapping_add(round)),
                ..self.params
            };
            let result = tabucol(inst.clone(), k, &params, Some(&best));
            if !result.valid {
                debug!("{}: no {}-coloring found (best: {} conflicts)", self.name(), k, result.stats.best_nb_conflicts);
                break;
            }
            best = result.colors;
            nb = nb_colors(&best);
            self.history.push(nb);
            debug!("{}: found a {}-coloring in {} iterations", self.name(), nb, result.stats.nb_iter);
            round += 1;
        }
        info!("{}: {} colors (constructor: {})", self.name(), nb, self.history[0]);
        self.colors = Some(best.clone());
        best
    }

    fn coloring(&self) -> Option<&Colors> { self.colors.as_ref() }
}
