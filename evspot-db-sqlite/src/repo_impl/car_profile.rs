use super::*;

impl<'a> CarProfileRepo for DbReadOnly<'a> {
    fn create_car_profile(&self, _profile: &CarProfile) -> Result<()> {
        unreachable!();
    }
    fn delete_car_profiles_of_owner(&self, _owner: &Id) -> Result<usize> {
        unreachable!();
    }
    fn car_profiles_of_owner(&self, owner: &Id) -> Result<Vec<CarProfile>> {
        car_profiles_of_owner(&mut self.conn.borrow_mut(), owner)
    }
}

impl<'a> CarProfileRepo for DbReadWrite<'a> {
    fn create_car_profile(&self, profile: &CarProfile) -> Result<()> {
        create_car_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn delete_car_profiles_of_owner(&self, owner: &Id) -> Result<usize> {
        delete_car_profiles_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn car_profiles_of_owner(&self, owner: &Id) -> Result<Vec<CarProfile>> {
        car_profiles_of_owner(&mut self.conn.borrow_mut(), owner)
    }
}

impl<'a> CarProfileRepo for DbConnection<'a> {
    fn create_car_profile(&self, profile: &CarProfile) -> Result<()> {
        create_car_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn delete_car_profiles_of_owner(&self, owner: &Id) -> Result<usize> {
        delete_car_profiles_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn car_profiles_of_owner(&self, owner: &Id) -> Result<Vec<CarProfile>> {
        car_profiles_of_owner(&mut self.conn.borrow_mut(), owner)
    }
}

fn create_car_profile(conn: &mut SqliteConnection, p: &CarProfile) -> Result<()> {
    let new_profile = models::NewCarProfile {
        id: p.id.as_str(),
        owner: p.owner.as_str(),
        brand: &p.brand,
        model: &p.model,
        year: i32::from(p.year),
        battery_capacity_kwh: p.battery_capacity_kwh,
        description: p.description.as_deref(),
        created_at: p.created_at.as_millis(),
    };
    diesel::insert_into(schema::car_profile::table)
        .values(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_car_profiles_of_owner(conn: &mut SqliteConnection, owner: &Id) -> Result<usize> {
    use schema::car_profile::dsl;
    diesel::delete(dsl::car_profile.filter(dsl::owner.eq(owner.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn car_profiles_of_owner(conn: &mut SqliteConnection, owner: &Id) -> Result<Vec<CarProfile>> {
    use schema::car_profile::dsl;
    dsl::car_profile
        .filter(dsl::owner.eq(owner.as_str()))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::CarProfileEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|e| {
            let models::CarProfileEntity {
                rowid: _,
                id,
                owner,
                brand,
                model,
                year,
                battery_capacity_kwh,
                description,
                created_at,
            } = e;
            let year = u16::try_from(year).map_err(|_| anyhow!("Invalid car year: {year}"))?;
            Ok(CarProfile {
                id: id.into(),
                owner: owner.into(),
                brand,
                model,
                year,
                battery_capacity_kwh,
                description,
                created_at: Timestamp::from_millis(created_at),
            })
        })
        .collect()
}
