//! Integration test for the load → compute → filter/sort → aggregate flow.

#[cfg(test)]
mod tests {
    use campaign_analytics::{CampaignReport, ReportOptions, SortKey};
    use campaign_core::loader::load_reader;
    use campaign_core::types::{CampaignRecord, TOTAL_LABEL};

    /// Sample export with mixed header casing, thousands separators and a
    /// campaign that never converted.
    const SAMPLE_CSV: &str = "\
Campaign_Name,Impressions,Clicks,Conversions,Spend,Revenue
Search - Brand,\"120,000\",4800,320,1850,9200
Display - Retargeting,400000,1200,30,2000,1500
Social - Awareness,80000,2400,0,600,0
Email - Winback,20000,1000,120,300,2400
Video - Launch,250000,3000,45,3000,9000
";

    fn load_sample() -> Vec<CampaignRecord> {
        load_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_full_flow_default_options() {
        let records = load_sample();
        assert_eq!(records.len(), 5);

        let report = CampaignReport::build(&records, &ReportOptions::default());
        let names: Vec<_> = report.campaigns.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Email - Winback",
                "Search - Brand",
                "Video - Launch",
                "Display - Retargeting",
                "Social - Awareness",
            ]
        );

        let search = &report.campaigns[1];
        assert_eq!(search.ctr, 4.0);
        assert_eq!(search.cvr, 6.67);
        assert_eq!(search.cpc, 0.39);
        assert_eq!(search.cpa, 5.78);
        assert_eq!(search.roas, 4.97);
        assert_eq!(search.rev_per_conv, 28.75);

        assert_eq!(report.totals.name, TOTAL_LABEL);
        assert_eq!(report.totals.spend, 7_750.0);
        assert_eq!(report.totals.revenue, 22_100.0);
        // 22100 / 7750 = 2.8516...
        assert_eq!(report.totals.roas, 2.85);
        assert_eq!(report.lowest_cpa.as_ref().unwrap().name, "Email - Winback");
    }

    #[test]
    fn test_min_roas_and_cpa_sort() {
        let records = load_sample();
        let options = ReportOptions {
            sort_key: SortKey::resolve(Some("CPA")),
            min_roas: 3.0,
        };
        let report = CampaignReport::build(&records, &options);

        // Video sits exactly on the threshold and is kept.
        let names: Vec<_> = report.campaigns.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Email - Winback", "Search - Brand", "Video - Launch"]);
        assert!(report.campaigns.iter().all(|m| m.roas >= 3.0));
        assert_eq!(report.filtered_out(), 2);

        assert_eq!(report.totals.spend, 5_150.0);
        assert_eq!(report.totals.conversions, 485.0);
    }

    #[test]
    fn test_unknown_sort_key_behaves_like_roas() {
        let records = load_sample();
        let by_roas = CampaignReport::build(&records, &ReportOptions::default());
        let fallback = CampaignReport::build(
            &records,
            &ReportOptions {
                sort_key: SortKey::resolve(Some("impressions")),
                min_roas: 0.0,
            },
        );
        assert_eq!(by_roas, fallback);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let records = load_sample();
        let options = ReportOptions {
            sort_key: SortKey::Ctr,
            min_roas: 0.5,
        };
        let first = serde_json::to_vec(&CampaignReport::build(&records, &options)).unwrap();
        let second = serde_json::to_vec(&CampaignReport::build(&records, &options)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_ratio_is_ever_non_finite() {
        let records = vec![
            CampaignRecord::empty("Nothing"),
            CampaignRecord::new("Only revenue", 0.0, 0.0, 0.0, 0.0, 1_000.0),
            CampaignRecord::new("Only spend", 0.0, 0.0, 0.0, 500.0, 0.0),
        ];
        for key in SortKey::ALL {
            let report = CampaignReport::build(
                &records,
                &ReportOptions {
                    sort_key: key,
                    min_roas: 0.0,
                },
            );
            for m in report.campaigns.iter().chain(std::iter::once(&report.totals)) {
                for v in [m.ctr, m.cvr, m.cpc, m.cpa, m.roas, m.rev_per_conv] {
                    assert!(v.is_finite());
                    assert!(v >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_signed_zero_revenue_ties_in_either_order() {
        let header = "campaign_name,impressions,clicks,conversions,spend,revenue\n";
        for (rows, expected) in [
            ("first,1000,50,2,100,0\nsecond,1000,50,2,100,-0\n", ["first", "second"]),
            ("second,1000,50,2,100,-0\nfirst,1000,50,2,100,0\n", ["second", "first"]),
        ] {
            let records = load_reader(format!("{header}{rows}").as_bytes()).unwrap();
            let report = CampaignReport::build(&records, &ReportOptions::default());
            let names: Vec<_> = report.campaigns.iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names, expected);
            assert!(report.campaigns.iter().all(|m| m.roas.is_sign_positive()));
        }
    }

    #[test]
    fn test_totals_of_loaded_records_are_finite() {
        let csv = "campaign_name,impressions,clicks,conversions,spend,revenue\n\
                   Big,1,1,1,9e307,1e308\n\
                   Bigger,1,1,1,8e307,7e307\n";
        let records = load_reader(csv.as_bytes()).unwrap();
        let report = CampaignReport::build(&records, &ReportOptions::default());
        assert!(report.totals.spend.is_finite());
        assert!(report.totals.revenue.is_finite());

        for m in report.campaigns.iter().chain(std::iter::once(&report.totals)) {
            for v in [m.ctr, m.cvr, m.cpc, m.cpa, m.roas, m.rev_per_conv] {
                assert!(v.is_finite());
            }
        }

        let value = serde_json::to_value(&report).unwrap();
        assert!(value["totals"]["spend"].is_f64());
        assert!(value["totals"]["revenue"].is_f64());
        assert!(serde_json::from_value::<CampaignReport>(value).is_ok());
    }
}
