pub mod configuration;

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod sampledcurve;
        }
    }
    pub mod lineardomain;
    pub mod rootfinder;
    pub mod softplus;
}

pub mod plot {
    pub mod clip;
    pub mod figure;
    pub mod figurelayout;
    pub mod linestyle;
    pub mod series;
}

pub mod scaling {
    pub mod betafunction;
    pub mod flowdirection;
    pub mod perturbation;
}

pub mod scalingerror;

pub mod scalingplot;
