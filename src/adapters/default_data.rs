//! Bundled fallback dataset.
//!
//! Used when no user dataset is configured, or when a user-supplied file
//! fails schema validation and the caller falls back.

use crate::adapters::csv_adapter::parse_series;
use crate::domain::error::SmacrossError;
use crate::domain::price::PricePoint;
use crate::ports::data_port::DataPort;

/// Daily ETH/USD-style OHLC sample, Jan-Feb 2024.
pub const DEFAULT_CSV: &str = "\
Date,Open,High,Low,Close\n\
2024-01-01,2280.00,2310.07,2268.05,2298.07\n\
2024-01-02,2298.07,2336.68,2283.11,2318.73\n\
2024-01-03,2318.73,2352.63,2308.02,2342.16\n\
2024-01-04,2342.16,2376.06,2336.74,2369.61\n\
2024-01-05,2369.61,2384.57,2352.53,2359.38\n\
2024-01-06,2359.38,2376.17,2335.40,2348.29\n\
2024-01-07,2348.29,2356.09,2332.38,2347.08\n\
2024-01-08,2347.08,2355.37,2335.01,2344.64\n\
2024-01-09,2344.64,2393.83,2339.54,2376.67\n\
2024-01-10,2376.67,2420.40,2368.92,2406.02\n\
2024-01-11,2406.02,2420.23,2392.32,2414.00\n\
2024-01-12,2414.00,2434.08,2399.77,2422.97\n\
2024-01-13,2422.97,2440.97,2396.39,2404.95\n\
2024-01-14,2404.95,2416.30,2388.59,2393.59\n\
2024-01-15,2393.59,2418.36,2384.83,2412.19\n\
2024-01-16,2412.19,2441.40,2397.85,2427.25\n\
2024-01-17,2427.25,2476.00,2413.69,2458.72\n\
2024-01-18,2458.72,2489.10,2451.16,2480.62\n\
2024-01-19,2480.62,2488.25,2462.94,2468.09\n\
2024-01-20,2468.09,2484.73,2454.16,2464.00\n\
2024-01-21,2464.00,2479.17,2421.63,2436.41\n\
2024-01-22,2436.41,2442.95,2406.27,2418.98\n\
2024-01-23,2418.98,2446.09,2412.30,2435.86\n\
2024-01-24,2435.86,2456.06,2430.35,2438.15\n\
2024-01-25,2438.15,2450.39,2422.64,2433.55\n\
2024-01-26,2433.55,2439.58,2406.37,2421.35\n\
2024-01-27,2421.35,2434.65,2367.44,2379.19\n\
2024-01-28,2379.19,2396.84,2351.58,2357.53\n\
2024-01-29,2357.53,2366.78,2345.80,2351.88\n\
2024-01-30,2351.88,2358.95,2336.10,2348.05\n\
2024-01-31,2348.05,2382.71,2333.09,2366.68\n\
2024-02-01,2366.68,2382.58,2350.06,2360.76\n\
2024-02-02,2360.76,2367.73,2327.72,2333.14\n\
2024-02-03,2333.14,2342.54,2305.22,2312.07\n\
2024-02-04,2312.07,2329.77,2264.69,2277.59\n\
2024-02-05,2277.59,2290.72,2253.85,2268.55\n\
2024-02-06,2268.55,2288.97,2258.93,2282.96\n\
2024-02-07,2282.96,2295.37,2276.09,2281.18\n\
2024-02-08,2281.18,2301.83,2273.43,2283.94\n\
2024-02-09,2283.94,2294.02,2250.61,2264.31\n\
2024-02-10,2264.31,2270.92,2233.90,2248.13\n\
2024-02-11,2248.13,2272.65,2239.57,2257.33\n\
2024-02-12,2257.33,2285.67,2252.33,2269.14\n\
2024-02-13,2269.14,2303.82,2260.37,2296.31\n\
2024-02-14,2296.31,2349.12,2281.97,2340.50\n\
2024-02-15,2340.50,2369.62,2326.94,2352.27\n\
2024-02-16,2352.27,2371.12,2344.71,2357.12\n\
2024-02-17,2357.12,2363.25,2351.70,2356.84\n\
2024-02-18,2356.84,2368.35,2335.42,2345.26\n\
2024-02-19,2345.26,2387.49,2330.49,2369.50\n\
2024-02-20,2369.50,2412.73,2356.78,2401.79\n\
2024-02-21,2401.79,2433.49,2395.11,2427.21\n\
2024-02-22,2427.21,2473.10,2421.70,2458.57\n\
2024-02-23,2458.57,2475.64,2444.31,2455.23\n\
2024-02-24,2455.23,2463.39,2430.53,2445.51\n\
2024-02-25,2445.51,2462.53,2433.76,2454.61\n\
2024-02-26,2454.61,2478.27,2448.65,2461.38\n\
2024-02-27,2461.38,2511.99,2455.29,2497.17\n\
2024-02-28,2497.17,2542.24,2485.21,2535.86\n\
2024-02-29,2535.86,2556.35,2520.90,2545.72\n";

pub struct DefaultDataAdapter;

impl DefaultDataAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultDataAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DataPort for DefaultDataAdapter {
    fn load_series(&self) -> Result<Vec<PricePoint>, SmacrossError> {
        parse_series(DEFAULT_CSV)
    }
}
