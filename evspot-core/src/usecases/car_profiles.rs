use super::prelude::*;
use crate::{
    gateways::content::{CarContentGateway, CarModel},
    util::validate::non_blank,
};

#[derive(Debug, Clone, Default)]
pub struct NewCar {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
}

fn parse_car_model(car: NewCar) -> Result<CarModel> {
    let brand = non_blank(car.brand).ok_or(Error::MissingField("brand"))?;
    let model = non_blank(car.model).ok_or(Error::MissingField("model"))?;
    let year = non_blank(car.year)
        .ok_or(Error::MissingField("year"))?
        .parse::<u16>()
        .map_err(|_| Error::VehicleYear)?;
    Ok(CarModel { brand, model, year })
}

/// Ask the content gateway about a car.
///
/// Nothing is stored, see [`store_car_profile`].
pub fn prepare_car_profile<G>(gateway: &G, owner: &Id, car: NewCar) -> Result<CarProfile>
where
    G: CarContentGateway + ?Sized,
{
    let car = parse_car_model(car)?;
    let content = gateway.generate_car_content(&car).map_err(|err| {
        log::warn!(
            "Failed to generate content for {} {} ({}): {err}",
            car.brand,
            car.model,
            car.year
        );
        Error::ContentGeneration(err.to_string())
    })?;
    let CarModel { brand, model, year } = car;
    Ok(CarProfile {
        id: Id::new(),
        owner: owner.clone(),
        brand,
        model,
        year,
        battery_capacity_kwh: content
            .battery_capacity_kwh
            .filter(|c| c.is_finite() && *c > 0.0),
        description: non_blank(Some(content.description)),
        created_at: Timestamp::now(),
    })
}

/// Make the profile the only car profile of its owner.
pub fn store_car_profile<R: CarProfileRepo>(repo: &R, profile: &CarProfile) -> Result<()> {
    let replaced = repo.delete_car_profiles_of_owner(&profile.owner)?;
    log::debug!(
        "Replacing {replaced} car profile(s) of user {}",
        profile.owner
    );
    repo.create_car_profile(profile)?;
    Ok(())
}

pub fn generate_car_profile<R, G>(
    repo: &R,
    gateway: &G,
    owner: &Id,
    car: NewCar,
) -> Result<CarProfile>
where
    R: CarProfileRepo,
    G: CarContentGateway + ?Sized,
{
    let profile = prepare_car_profile(gateway, owner, car)?;
    store_car_profile(repo, &profile)?;
    Ok(profile)
}

pub fn car_profiles_of_user<R: CarProfileRepo>(repo: &R, user_id: &Id) -> Result<Vec<CarProfile>> {
    Ok(repo.car_profiles_of_owner(user_id)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyContentGenerator, MockDb},
        *,
    };

    fn new_car() -> NewCar {
        NewCar {
            brand: Some("Tesla".into()),
            model: Some("Model 3".into()),
            year: Some("2022".into()),
        }
    }

    #[test]
    fn generate_profile() {
        let db = MockDb::default();
        let gw = DummyContentGenerator::answering(Some(57.5), "A compact sedan");
        let user = Id::new();
        let profile = generate_car_profile(&db, &gw, &user, new_car()).unwrap();
        assert_eq!(Some(57.5), profile.battery_capacity_kwh);
        assert_eq!(Some("A compact sedan"), profile.description.as_deref());
        assert_eq!(2022, profile.year);
        assert_eq!(vec![profile], car_profiles_of_user(&db, &user).unwrap());
        assert_eq!(
            Some(CarModel {
                brand: "Tesla".into(),
                model: "Model 3".into(),
                year: 2022
            }),
            gw.last_request()
        );
    }

    #[test]
    fn replace_previous_profile() {
        let db = MockDb::default();
        let gw = DummyContentGenerator::answering(Some(40.0), "Small hatchback");
        let user = Id::new();
        let other = Id::new();
        generate_car_profile(&db, &gw, &user, new_car()).unwrap();
        generate_car_profile(&db, &gw, &other, new_car()).unwrap();
        let car = NewCar {
            model: Some("Model Y".into()),
            ..new_car()
        };
        generate_car_profile(&db, &gw, &user, car).unwrap();
        let profiles = car_profiles_of_user(&db, &user).unwrap();
        assert_eq!(1, profiles.len());
        assert_eq!("Model Y", profiles[0].model);
        assert_eq!(1, car_profiles_of_user(&db, &other).unwrap().len());
    }

    #[test]
    fn missing_car_details() {
        let db = MockDb::default();
        let gw = DummyContentGenerator::answering(None, "");
        let car = NewCar {
            year: Some(" ".into()),
            ..new_car()
        };
        assert!(matches!(
            generate_car_profile(&db, &gw, &Id::new(), car),
            Err(Error::MissingField("year"))
        ));
        let car = NewCar {
            brand: None,
            ..new_car()
        };
        assert!(matches!(
            generate_car_profile(&db, &gw, &Id::new(), car),
            Err(Error::MissingField("brand"))
        ));
        assert_eq!(None, gw.last_request());
    }

    #[test]
    fn gateway_failure() {
        let db = MockDb::default();
        let gw = DummyContentGenerator::failing();
        let user = Id::new();
        assert!(matches!(
            generate_car_profile(&db, &gw, &user, new_car()),
            Err(Error::ContentGeneration(_))
        ));
        assert!(car_profiles_of_user(&db, &user).unwrap().is_empty());
    }
}
